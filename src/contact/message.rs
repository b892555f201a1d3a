use thiserror::Error;

/// The hand-off to whatever composes mail in the host environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl OutgoingMessage {
    pub fn mailto_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    #[error("couldn't open a mail client, please email directly")]
    MailClientUnavailable,
    #[error("clipboard access is unavailable")]
    ClipboardUnavailable,
}

pub trait MessageComposer {
    fn compose(&self, message: &OutgoingMessage) -> Result<(), CollaboratorError>;
}

pub(super) fn letter(greeting: &str, content: &str, name: &str) -> String {
    let mut body = format!("Hi {greeting},\n\n{content}\n\nBest,");
    if !name.is_empty() {
        body.push('\n');
        body.push_str(name);
    }
    body
}

pub(super) fn strategist_brief(mission: &str, scope: &str, constraints: &str) -> String {
    format!(
        "--- STRATEGIST BRIEF ---\n\nMISSION: {mission}\n\nSCOPE: {scope}\n\nCONSTRAINTS: {constraints}\n\n------------------------"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_encodes_subject_and_body() {
        let msg = OutgoingMessage {
            recipient: "me@example.com".to_string(),
            subject: "Hello & welcome".to_string(),
            body: "Line one\nLine two?".to_string(),
        };
        assert_eq!(
            msg.mailto_uri(),
            "mailto:me@example.com?subject=Hello%20%26%20welcome&body=Line%20one%0ALine%20two%3F"
        );
    }

    #[test]
    fn test_letter_signature() {
        assert_eq!(letter("Ian", "Hi", "Jane"), "Hi Ian,\n\nHi\n\nBest,\nJane");
        assert_eq!(letter("Ian", "Hi", ""), "Hi Ian,\n\nHi\n\nBest,");
    }
}
