use super::{CmdMessage, CmdResult, GOOD_BYE};

pub const GREETING: &str = "How can I help you?";
pub const UNDEFINED: &str = "What do you mean?";

pub fn hello() -> CmdResult {
    CmdResult::message(CmdMessage::info(GREETING))
}

pub fn good_bye() -> CmdResult {
    CmdResult::message(CmdMessage::info(GOOD_BYE)).with_exit()
}

/// Ends the session without a word.
pub fn quit() -> CmdResult {
    CmdResult::default().with_exit()
}

pub fn undefined() -> CmdResult {
    CmdResult::message(CmdMessage::warning(UNDEFINED))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn good_bye_ends_session_with_message() {
        let result = good_bye();
        assert!(result.exit);
        assert_eq!(result.text(), "Good bye!");
    }

    #[test]
    fn quit_is_silent() {
        let result = quit();
        assert!(result.exit);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn hello_and_undefined_keep_going() {
        assert!(!hello().exit);
        assert_eq!(hello().text(), "How can I help you?");
        assert_eq!(undefined().text(), "What do you mean?");
    }
}
