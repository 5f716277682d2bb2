use crate::errors::AppError;
use crate::scoreboard::{DEFAULT_COUNTERS, Scoreboard};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Increment,
    Decrement,
    Reset,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Increment, Action::Decrement, Action::Reset];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "inc" => Some(Action::Increment),
            "dec" => Some(Action::Decrement),
            "reset" => Some(Action::Reset),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Increment => "inc",
            Action::Decrement => "dec",
            Action::Reset => "reset",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Action::Increment => "+1",
            Action::Decrement => "-1",
            Action::Reset => "Zerar",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub action: Action,
    pub target: String,
}

impl Command {
    pub fn new(action: Action, target: impl Into<String>) -> Self {
        Self {
            action,
            target: target.into(),
        }
    }

    // Unknown actions and blank targets are rejected.
    pub fn parse(action: &str, target: &str) -> Option<Self> {
        let action = Action::parse(action)?;
        let target = target.trim();
        if target.is_empty() {
            return None;
        }
        Some(Self::new(action, target))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub id: String,
    pub label: &'static str,
    pub command: Command,
}

#[derive(Debug, Clone, Default)]
pub struct ControlTable {
    controls: Vec<Control>,
}

impl ControlTable {
    pub fn standard() -> Self {
        let mut table = Self::default();
        for counter in DEFAULT_COUNTERS {
            table.register_counter(counter);
        }
        table
    }

    pub fn register_counter(&mut self, counter: &str) {
        for action in Action::ALL {
            self.register(Control {
                id: format!("{counter}-{}", action.as_str()),
                label: action.label(),
                command: Command::new(action, counter),
            });
        }
    }

    pub fn register(&mut self, control: Control) {
        self.controls.retain(|existing| existing.id != control.id);
        self.controls.push(control);
    }

    pub fn find(&self, id: &str) -> Option<&Command> {
        self.controls
            .iter()
            .find(|control| control.id == id)
            .map(|control| &control.command)
    }

    pub fn for_target<'a>(&'a self, target: &'a str) -> impl Iterator<Item = &'a Control> + 'a {
        self.controls
            .iter()
            .filter(move |control| control.command.target == target)
    }
}

pub async fn dispatch(board: &mut Scoreboard, command: &Command) -> Result<(), AppError> {
    debug!(action = command.action.as_str(), target = %command.target, "scoreboard command");
    match command.action {
        Action::Increment => board.change(&command.target, 1).await.map(|_| ()),
        Action::Decrement => board.change(&command.target, -1).await.map(|_| ()),
        Action::Reset => board.reset(&command.target).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::LocalStorage;

    #[test]
    fn parse_accepts_known_actions_only() {
        assert_eq!(
            Command::parse("inc", "kills"),
            Some(Command::new(Action::Increment, "kills"))
        );
        assert_eq!(
            Command::parse("reset", " scoreA "),
            Some(Command::new(Action::Reset, "scoreA"))
        );
        assert_eq!(Command::parse("double", "kills"), None);
        assert_eq!(Command::parse("inc", "   "), None);
    }

    #[test]
    fn action_names_round_trip() {
        for action in Action::ALL {
            assert_eq!(Action::parse(action.as_str()), Some(action));
        }
        assert_eq!(Action::parse(" dec "), Some(Action::Decrement));
        assert_eq!(Action::parse("INC"), None);
    }

    #[test]
    fn standard_table_covers_every_counter_and_action() {
        let table = ControlTable::standard();
        for counter in DEFAULT_COUNTERS {
            assert_eq!(table.for_target(counter).count(), 3);
        }
        assert_eq!(
            table.find("deaths-dec"),
            Some(&Command::new(Action::Decrement, "deaths"))
        );
        assert_eq!(table.find("deaths-triple"), None);
    }

    #[test]
    fn register_replaces_duplicate_ids() {
        let mut table = ControlTable::standard();
        table.register(Control {
            id: "kills-inc".to_string(),
            label: "+1",
            command: Command::new(Action::Increment, "assists"),
        });
        assert_eq!(
            table.find("kills-inc").map(|command| command.target.as_str()),
            Some("assists")
        );
        assert_eq!(table.for_target("kills").count(), 2);
    }

    #[tokio::test]
    async fn dispatch_routes_each_action() {
        let mut board = Scoreboard::load(LocalStorage::in_memory()).await;
        let table = ControlTable::standard();

        for id in ["scoreA-inc", "scoreA-inc", "scoreA-inc", "scoreA-dec"] {
            let command = table.find(id).unwrap().clone();
            dispatch(&mut board, &command).await.unwrap();
        }
        assert_eq!(board.state().get("scoreA"), Some(2));

        let reset = table.find("scoreA-reset").unwrap().clone();
        dispatch(&mut board, &reset).await.unwrap();
        assert_eq!(board.state().get("scoreA"), Some(0));
    }
}
