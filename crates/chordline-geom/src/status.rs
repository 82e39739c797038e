use super::session::Session;

/// Number of status text slots shown by the exercise.
pub const STATUS_SLOTS: usize = 3;

/// The three status lines: last primitive, instructions/segment, result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLines {
    pub primitive: String,
    pub progress: String,
    pub result: String,
}

impl StatusLines {
    pub fn from_session(session: &Session) -> Self {
        let primitive = match session.circle() {
            Some(c) => format!("Circle: center {} radius = {:.2}", c.center, c.radius),
            None => "No line segment".to_string(),
        };

        let progress = match (session.circle(), session.segment()) {
            (_, Some(s)) => format!("Second line segment: {} ~ {}", s.start, s.end),
            (Some(_), None) => "Click and drag to draw the second line segment".to_string(),
            (None, None) => "Click mouse button and drag to draw line segments".to_string(),
        };

        let result = match session.intersections() {
            None => String::new(),
            Some(Err(_)) => "No Intersection (degenerate segment)".to_string(),
            Some(Ok(hits)) => match hits.points() {
                [] => "No Intersection".to_string(),
                [a] => format!("Intersection Points: 1 Point 1: {a}"),
                [a, b, ..] => format!("Intersection Points: 2 Point 1: {a} Point 2: {b}"),
            },
        };

        Self { primitive, progress, result }
    }

    /// Lines in slot order.
    pub fn slots(&self) -> [&str; STATUS_SLOTS] {
        [&self.primitive, &self.progress, &self.result]
    }
}
