use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Answer, Event};
use crate::symbols::AvailabilitySymbol;

/// Cell content for a date the participant did not answer.
pub const EMPTY_CELL: &str = "-";

/// The shared table of responses: one column per candidate date, one row
/// per answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponseGrid {
    pub event_id: String,
    /// Event dates in event order
    pub columns: Vec<String>,
    pub rows: Vec<GridRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GridRow {
    pub answer_id: String,
    pub user_name: String,
    /// Submitted value per column, or [`EMPTY_CELL`]
    pub cells: Vec<String>,
}

impl ResponseGrid {
    /// Lay out `answers` against `event`'s dates.
    ///
    /// Availability keys that are not event dates do not appear in the grid.
    pub fn build(event: &Event, answers: &[Answer]) -> Self {
        let rows = answers
            .iter()
            .map(|answer| GridRow {
                answer_id: answer.id.clone(),
                user_name: answer.user_name.clone(),
                cells: event
                    .dates
                    .iter()
                    .map(|date| {
                        answer
                            .availability
                            .get(date)
                            .filter(|value| !value.is_empty())
                            .map_or_else(|| EMPTY_CELL.to_string(), Clone::clone)
                    })
                    .collect(),
            })
            .collect();

        Self {
            event_id: event.id.clone(),
            columns: event.dates.clone(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl GridRow {
    /// Cells read as symbols; `None` for empty or unrecognised values.
    pub fn symbols(&self) -> Vec<Option<AvailabilitySymbol>> {
        self.cells
            .iter()
            .map(|cell| AvailabilitySymbol::parse(cell))
            .collect()
    }
}
