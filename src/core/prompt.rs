use std::sync::Mutex;

// UserPrompt abstracts the host's blocking dialogs: a yes/no confirmation and an
// informational notice.
pub trait UserPrompt: Sync + Send {
    fn confirm(&self, message: &str) -> bool;
    fn notify(&self, message: &str);
}

// AnsweredPrompt replays an answer the user already gave (e.g. a submitted yes/no form)
// and keeps notices so they can be rendered with the next page.
#[derive(Debug, Default)]
pub struct AnsweredPrompt {
    answer: bool,
    notices: Mutex<Vec<String>>,
}

impl AnsweredPrompt {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            notices: Mutex::new(vec![]),
        }
    }

    pub fn notices(&self) -> Vec<String> {
        match self.notices.lock() {
            Ok(notices) => notices.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl UserPrompt for AnsweredPrompt {
    fn confirm(&self, _message: &str) -> bool {
        self.answer
    }

    fn notify(&self, message: &str) {
        match self.notices.lock() {
            Ok(mut notices) => notices.push(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push(message.to_string()),
        }
    }
}
