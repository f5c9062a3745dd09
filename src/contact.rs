use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

/// Characters left alone by JavaScript's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(Field),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Subject, &self.subject),
            (Field::Message, &self.message),
        ];
        match fields.into_iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(ContactError::MissingField(field)),
            None => Ok(()),
        }
    }

    pub fn body(&self, greeting_name: &str) -> String {
        format!(
            "Hello {greeting_name},\n\nName: {}\nEmail: {}\n\nMessage:\n{}\n\nRegards,\n{}",
            self.name, self.email, self.message, self.name
        )
    }

    /// Builds the `mailto:` link handed to the visitor's mail client.
    pub fn mailto(&self, recipient: &str, greeting_name: &str) -> Result<String, ContactError> {
        self.validate()?;
        Ok(format!(
            "mailto:{recipient}?subject={}&body={}",
            utf8_percent_encode(&self.subject, COMPONENT),
            utf8_percent_encode(&self.body(greeting_name), COMPONENT),
        ))
    }
}
