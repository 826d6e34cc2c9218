use serde::Deserialize;

/// Direction of the rendered move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveOrder {
    #[default]
    Ascending,
    Descending,
}

/// Options a page may pass when starting a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub order: MoveOrder,
}
