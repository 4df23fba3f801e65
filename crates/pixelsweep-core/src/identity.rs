/// Which frame (event) and which resource produced the displayed image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageIdentity {
    pub event_id: i64,
    pub resource_id: i64,
}

impl ImageIdentity {
    pub fn new(event_id: i64, resource_id: i64) -> Self {
        Self {
            event_id,
            resource_id,
        }
    }
}

impl std::fmt::Display for ImageIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "event {} / resource {}", self.event_id, self.resource_id)
    }
}
