use gpui::{
    AnyElement, App, Context, IntoElement, ParentElement, Render, Styled, Subscription, Window,
    div,
};
use gpui_component::StyledExt;
use tracing::info;

use crate::{Quit, quit};

/// Root view of the single application window.
///
/// Holds a content factory rather than an element so stateless `RenderOnce`
/// components are reconstructed each frame. Closing the window quits the
/// application.
pub struct AppWindow {
    _window_close_subscription: Subscription,
    content: Box<dyn Fn() -> AnyElement>,
}

impl AppWindow {
    pub fn new(
        content: impl Fn() -> AnyElement + 'static,
        cx: &mut Context<Self>,
    ) -> Self {
        let subscription = cx.on_window_closed(|cx: &mut App| {
            info!("main window closed");
            quit(&Quit, cx);
        });

        Self {
            _window_close_subscription: subscription,
            content: Box::new(content),
        }
    }
}

impl Render for AppWindow {
    fn render(
        &mut self,
        _: &mut Window,
        _cx: &mut Context<Self>,
    ) -> impl IntoElement {
        div()
            .v_flex()
            .gap_2()
            .size_full()
            .child((self.content)())
    }
}
