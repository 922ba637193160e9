use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: Uuid,
    pub message: String,
    pub level: NoticeLevel,
}

/// Messages waiting for the host to show them to the user.
#[derive(Clone, Debug, Default)]
pub struct Notices(Vec<Notice>);

impl Notices {
    pub fn add(&mut self, message: impl Into<String>, level: NoticeLevel) -> Uuid {
        let id = Uuid::new_v4();
        self.0.push(Notice {
            id,
            message: message.into(),
            level,
        });
        id
    }

    pub fn remove(&mut self, id: Uuid) {
        if let Some(index) = self.0.iter().position(|n| n.id == id) {
            self.0.remove(index);
        }
    }

    pub fn success(&mut self, message: impl Into<String>) -> Uuid {
        self.add(message, NoticeLevel::Success)
    }

    pub fn warning(&mut self, message: impl Into<String>) -> Uuid {
        self.add(message, NoticeLevel::Warning)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Notice> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Takes every pending notice, oldest first.
    pub fn drain(&mut self) -> std::vec::Drain<'_, Notice> {
        self.0.drain(..)
    }
}
