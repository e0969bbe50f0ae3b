use gpui::{
    AnyElement, App, AppContext, Context, IntoElement, KeyBinding, Menu, MenuItem, ParentElement,
    Styled, Window,
};
use gpui_component::v_flex;

use crate::components::MortgageForm;
use crate::{Quit, quit};

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    app_cx.activate(true);

    // Bind platform-appropriate quit shortcut
    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    // Register the quit action handler
    app_cx.on_action(quit);

    // Set up the application menu with Quit
    app_cx.set_menus(vec![Menu {
        name: "Mortgage Calculator".into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Builds the primary window content.
///
/// Returns a factory suitable for [`AppWindow`], producing the calculator
/// form on each render frame. The form recomputes its estimate on every
/// input change, so there is no submit step.
///
/// [`AppWindow`]: crate::components::AppWindow
pub fn build_main_content(
    window: &mut Window,
    app_cx: &mut App,
) -> impl Fn() -> AnyElement + 'static {
    let form = app_cx.new(|form_cx: &mut Context<MortgageForm>| {
        MortgageForm::new(window, form_cx)
    });

    move || {
        v_flex()
            .size_full()
            .p_5()
            .gap_4()
            .child(form.clone())
            .into_any_element()
    }
}
