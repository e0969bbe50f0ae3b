pub mod mortgage_form;
pub mod window;

use gpui::{Pixels, Size, px};

pub use mortgage_form::MortgageForm;
pub use window::AppWindow;

#[derive(Debug, Clone, Copy)]
pub struct WindowPreferences {
    pub size: Size<Pixels>,
}

impl Default for WindowPreferences {
    fn default() -> Self {
        Self {
            size: Size {
                width: px(860.0),
                height: px(560.0),
            },
        }
    }
}
