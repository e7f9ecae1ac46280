use std::cell::RefCell;
use std::rc::Rc;

use common::Color;

/// Shared body-tone resource.
///
/// Cloning yields another handle to the same tone. Only the customization
/// state writes it; renderers hold clones and read.
#[derive(Debug, Clone)]
pub struct SkinMaterial {
    tone: Rc<RefCell<Color>>,
}

impl SkinMaterial {
    pub fn new(tone: Color) -> Self {
        Self {
            tone: Rc::new(RefCell::new(tone)),
        }
    }

    pub fn color(&self) -> Color {
        self.tone.borrow().clone()
    }

    pub(crate) fn set_color(&self, color: Color) {
        *self.tone.borrow_mut() = color;
    }

    /// True when both handles point at the same material.
    pub fn shares_with(&self, other: &SkinMaterial) -> bool {
        Rc::ptr_eq(&self.tone, &other.tone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_observe_writes() {
        let skin = SkinMaterial::new("#e0ac69".parse().unwrap());
        let reader = skin.clone();

        skin.set_color("#112233".parse().unwrap());

        assert_eq!(reader.color().as_str(), "#112233");
        assert!(reader.shares_with(&skin));
        assert!(!reader.shares_with(&SkinMaterial::new("#000".parse().unwrap())));
    }
}
