/// Pointer-following highlight for a card.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spotlight {
    x: f64,
    y: f64,
    hovered: bool,
}

impl Spotlight {
    pub fn enter(&mut self) {
        self.hovered = true;
    }

    pub fn leave(&mut self) {
        self.hovered = false;
    }

    /// Tracks the pointer relative to the card's top-left corner.
    pub fn track(&mut self, client_x: f64, client_y: f64, left: f64, top: f64) {
        self.x = client_x - left;
        self.y = client_y - top;
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn opacity(&self) -> f64 {
        if self.hovered {
            1.0
        } else {
            0.0
        }
    }

    pub fn background(&self, color: &str) -> String {
        format!(
            "radial-gradient(600px circle at {}px {}px, {color}, transparent 40%)",
            self.x, self.y
        )
    }
}
