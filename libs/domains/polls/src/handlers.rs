use axum::{Router, extract::State, routing::post};
use axum_helpers::{
    Envelope,
    errors::{
        handlers::method_not_allowed,
        responses::{
            BadRequestValidationResponse, InternalServerErrorResponse, MethodNotAllowedResponse,
            NotFoundResponse,
        },
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::PollResult;
use crate::grid::{GridRow, ResponseGrid};
use crate::models::{Answer, CreateAnswer, CreateEvent, Created, Event};
use crate::repository::{AnswerRepository, EventRepository};
use crate::service::{AnswerService, EventService};
use crate::symbols::AvailabilitySymbol;

pub const EVENT_CREATED: &str = "Event created successfully";
pub const ANSWER_SUBMITTED: &str = "Answer submitted successfully";

/// OpenAPI documentation for the polls API
#[derive(OpenApi)]
#[openapi(
    paths(create_event, submit_answer),
    components(
        schemas(
            CreateEvent,
            CreateAnswer,
            Created,
            Event,
            Answer,
            ResponseGrid,
            GridRow,
            AvailabilitySymbol
        ),
        responses(
            BadRequestValidationResponse,
            NotFoundResponse,
            MethodNotAllowedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Polls", description = "Scheduling polls: create events and submit availability")
    )
)]
pub struct ApiDoc;

/// Routes `/events` and `/answers`. Both accept POST only; any other method
/// is answered with 405 before the body is read.
pub fn router<E, A>(events: EventService<E>, answers: AnswerService<E, A>) -> Router
where
    E: EventRepository + 'static,
    A: AnswerRepository + 'static,
{
    let event_routes = Router::new()
        .route(
            "/events",
            post(create_event::<E>).fallback(method_not_allowed),
        )
        .with_state(Arc::new(events));

    let answer_routes = Router::new()
        .route(
            "/answers",
            post(submit_answer::<E, A>).fallback(method_not_allowed),
        )
        .with_state(Arc::new(answers));

    event_routes.merge(answer_routes)
}

/// Create an event
#[utoipa::path(
    post,
    path = "/events",
    tag = "Polls",
    request_body = Envelope<CreateEvent>,
    responses(
        (status = 200, description = "Event created", body = Envelope<Created>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 405, response = MethodNotAllowedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_event<E: EventRepository>(
    State(service): State<Arc<EventService<E>>>,
    Envelope { data: input }: Envelope<CreateEvent>,
) -> PollResult<Envelope<Created>> {
    let id = service.create(input).await?;
    Ok(Envelope::new(Created::new(id, EVENT_CREATED)))
}

/// Submit availability for an event
#[utoipa::path(
    post,
    path = "/answers",
    tag = "Polls",
    request_body = Envelope<CreateAnswer>,
    responses(
        (status = 200, description = "Answer stored", body = Envelope<Created>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 405, response = MethodNotAllowedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn submit_answer<E: EventRepository, A: AnswerRepository>(
    State(service): State<Arc<AnswerService<E, A>>>,
    Envelope { data: input }: Envelope<CreateAnswer>,
) -> PollResult<Envelope<Created>> {
    let id = service.create(input).await?;
    Ok(Envelope::new(Created::new(id, ANSWER_SUBMITTED)))
}
