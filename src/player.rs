// Copyright (C) 2020-2026 Andy Kurnia.

use super::movegen;

// Who decides a seat's moves. The engine itself never looks at this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Controller {
    Human,
    Computer(movegen::Policy),
}

impl std::str::FromStr for Controller {
    type Err = String;

    // "human", "computer" (anchored search), or a policy name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" => Ok(Controller::Human),
            "computer" | "cpu" => Ok(Controller::Computer(movegen::Policy::Anchored)),
            policy => policy.parse().map(Controller::Computer),
        }
    }
}

impl std::fmt::Display for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Controller::Human => f.write_str("human"),
            Controller::Computer(policy) => write!(f, "computer ({})", policy),
        }
    }
}
