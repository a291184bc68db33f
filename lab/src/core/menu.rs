//! Menu tokens and the activities they select.

/// One selectable lab activity, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityId {
    Setup,
    Calculator,
    Loops,
    Students,
    Exceptions,
    Debugging,
}

impl ActivityId {
    pub const ALL: [ActivityId; 6] = [
        ActivityId::Setup,
        ActivityId::Calculator,
        ActivityId::Loops,
        ActivityId::Students,
        ActivityId::Exceptions,
        ActivityId::Debugging,
    ];

    /// Menu number, 1-based.
    pub fn number(self) -> u8 {
        match self {
            ActivityId::Setup => 1,
            ActivityId::Calculator => 2,
            ActivityId::Loops => 3,
            ActivityId::Students => 4,
            ActivityId::Exceptions => 5,
            ActivityId::Debugging => 6,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ActivityId::Setup => "Setting Up the Development Environment",
            ActivityId::Calculator => "Basic Calculator (Syntax and Control Structures)",
            ActivityId::Loops => "Loops and Functions",
            ActivityId::Students => "Object-Oriented Programming",
            ActivityId::Exceptions => "Exception Handling",
            ActivityId::Debugging => "Debugging Guide",
        }
    }
}

/// Result of reading a menu token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSelection {
    Run(ActivityId),
    Exit,
}

pub const EXIT_TOKEN: &str = "0";

/// Map a raw input line to a selection. Surrounding whitespace is ignored.
///
/// Returns `None` for unmapped tokens.
pub fn parse_selection(input: &str) -> Option<MenuSelection> {
    let token = input.trim();
    if token == EXIT_TOKEN {
        return Some(MenuSelection::Exit);
    }
    ActivityId::ALL
        .into_iter()
        .find(|activity| token == activity.number().to_string())
        .map(MenuSelection::Run)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_exits() {
        assert_eq!(parse_selection("0"), Some(MenuSelection::Exit));
        assert_eq!(parse_selection(" 0 \n"), Some(MenuSelection::Exit));
    }

    #[test]
    fn numbers_map_in_menu_order() {
        for (idx, activity) in ActivityId::ALL.into_iter().enumerate() {
            let token = (idx + 1).to_string();
            assert_eq!(parse_selection(&token), Some(MenuSelection::Run(activity)));
        }
    }

    #[test]
    fn unmapped_tokens_are_rejected() {
        for token in ["9", "", "7", "-1", "01", "two", "1 2"] {
            assert_eq!(parse_selection(token), None, "token {token:?}");
        }
    }
}
