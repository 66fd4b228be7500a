use serde::Serialize;

/// Who sees the reply in the channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    InChannel,
    Ephemeral,
}

/// Outbound Slack message envelope
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlackMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_type: Option<ResponseType>,
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub title: String,
    pub value: String,
    pub short: bool,
}

impl SlackMessage {
    pub fn in_channel(text: impl Into<String>) -> Self {
        Self {
            response_type: Some(ResponseType::InChannel),
            text: text.into(),
            attachments: Vec::new(),
        }
    }

    pub fn ephemeral(text: impl Into<String>) -> Self {
        Self {
            response_type: Some(ResponseType::Ephemeral),
            text: text.into(),
            attachments: Vec::new(),
        }
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }
}

impl Attachment {
    pub fn colored(color: &str) -> Self {
        Self {
            color: Some(color.to_string()),
            text: None,
            fields: Vec::new(),
            ts: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_field(mut self, title: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(Field {
            title: title.into(),
            value: value.into(),
            short: true,
        });
        self
    }

    pub fn with_timestamp(mut self, ts: i64) -> Self {
        self.ts = Some(ts);
        self
    }
}
