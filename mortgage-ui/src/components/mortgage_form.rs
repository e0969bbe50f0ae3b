use gpui::{
    App, AppContext, Context, Div, Entity, IntoElement, ParentElement, Render, RenderOnce,
    SharedString, Styled, TextAlign, Window, div, px,
};
use gpui_component::{
    IndexPath, h_flex,
    input::{Input, InputState, MaskPattern},
    select::{Select, SelectState},
    v_flex,
};
use mortgage_core::{
    CreditTier, LoanType, PaymentEstimate, PaymentWorksheet, PaymentWorksheetConfig,
};
use tracing::debug;

use crate::{
    models::MortgageFormModel,
    utils::{format_currency, format_whole_currency, parse_decimal},
};

/// The single-page calculator form.
///
/// Five numeric fields plus the two borrower-profile selects. Every input
/// change notifies the form, which re-runs the payment worksheet and renders
/// the result panel on the right; validation failures render as an inline
/// message instead of a nonsense figure.
#[derive(Clone, Debug)]
pub struct MortgageForm {
    home_price: Entity<InputState>,
    down_payment_percent: Entity<InputState>,
    annual_rate_percent: Entity<InputState>,
    annual_taxes: Entity<InputState>,
    monthly_hoa: Entity<InputState>,
    credit: Entity<SelectState<Vec<SharedString>>>,
    loan_type: Entity<SelectState<Vec<SharedString>>>,
}

impl MortgageForm {
    pub fn new(
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let credit = make_select_state(
            CreditTier::all().iter().map(|t| t.as_str()),
            CreditTier::default().as_str(),
            window,
            cx,
        );
        let loan_type = make_select_state(
            LoanType::all().iter().map(|t| t.as_str()),
            LoanType::default().as_str(),
            window,
            cx,
        );

        let home_price = make_input_state_with_decimal_mask("e.g. 800,000", "800000", window, cx);
        let down_payment_percent = make_input_state_with_decimal_mask("e.g. 5", "5", window, cx);
        let annual_rate_percent = make_input_state_with_decimal_mask("e.g. 7.0", "7.0", window, cx);
        let annual_taxes = make_input_state_with_decimal_mask("e.g. 4,800", "4800", window, cx);
        let monthly_hoa = make_input_state_with_decimal_mask("e.g. 0", "0", window, cx);

        for state in [
            &home_price,
            &down_payment_percent,
            &annual_rate_percent,
            &annual_taxes,
            &monthly_hoa,
        ] {
            cx.observe(state, |_, _, cx| cx.notify()).detach();
        }
        cx.observe(&credit, |_, _, cx| cx.notify()).detach();
        cx.observe(&loan_type, |_, _, cx| cx.notify()).detach();

        Self {
            home_price,
            down_payment_percent,
            annual_rate_percent,
            annual_taxes,
            monthly_hoa,
            credit,
            loan_type,
        }
    }

    /// Collects the current form values into a [`MortgageFormModel`].
    pub fn to_model(
        &self,
        cx: &App,
    ) -> Result<MortgageFormModel, anyhow::Error> {
        let credit = self
            .credit
            .read(cx)
            .selected_value()
            .and_then(|s| CreditTier::parse(s.as_ref()))
            .ok_or_else(|| anyhow::anyhow!("No credit score range selected"))?;
        let loan_type = self
            .loan_type
            .read(cx)
            .selected_value()
            .and_then(|s| LoanType::parse(s.as_ref()))
            .ok_or_else(|| anyhow::anyhow!("No loan type selected"))?;

        Ok(MortgageFormModel {
            home_price: parse_decimal(self.home_price.read(cx).value().as_str())?,
            down_payment_percent: parse_decimal(
                self.down_payment_percent.read(cx).value().as_str(),
            )?,
            annual_rate_percent: parse_decimal(self.annual_rate_percent.read(cx).value().as_str())?,
            annual_taxes: parse_decimal(self.annual_taxes.read(cx).value().as_str())?,
            monthly_hoa: parse_decimal(self.monthly_hoa.read(cx).value().as_str())?,
            credit,
            loan_type,
        })
    }

    /// Runs the payment worksheet against the current form values.
    fn compute(
        &self,
        cx: &App,
    ) -> Result<PaymentEstimate, String> {
        let model = self.to_model(cx).map_err(|e| e.to_string())?;
        debug!(%model, "recalculating");

        let worksheet = PaymentWorksheet::new(PaymentWorksheetConfig::default());
        worksheet
            .calculate(&model.to_inputs())
            .map_err(|e| e.to_string())
    }

    fn render_results(estimate: Result<PaymentEstimate, String>) -> Div {
        let panel = v_flex().gap_2().size_full().p_2();

        match estimate {
            Ok(estimate) => panel
                .child(div().text_xl().font_weight(gpui::FontWeight::BOLD).child(format!(
                    "Monthly Payment: ${}",
                    format_currency(estimate.total_monthly_payment)
                )))
                .child(div().text_lg().child(format!(
                    "Est. Income Needed: ${} / year",
                    format_whole_currency(estimate.annual_income_needed)
                )))
                .child(div().text_sm().child(format!(
                    "Loan amount: ${}",
                    format_currency(estimate.loan_amount)
                )))
                .child(div().text_sm().child(format!(
                    "Principal & interest: ${}",
                    format_currency(estimate.principal_and_interest)
                )))
                .child(div().text_sm().child(format!(
                    "Property taxes: ${}",
                    format_currency(estimate.monthly_taxes)
                )))
                .child(div().text_sm().child(format!(
                    "HOA: ${}",
                    format_currency(estimate.monthly_hoa)
                )))
                .child(div().text_sm().child(format!(
                    "PMI: ${}",
                    format_currency(estimate.private_mortgage_insurance)
                ))),
            Err(message) => panel.child(
                div()
                    .text_color(gpui::rgb(0xb91c1c))
                    .child(message),
            ),
        }
    }
}

impl Render for MortgageForm {
    fn render(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let estimate = self.compute(cx);

        div()
            .size_full()
            .child(make_labeled_row("Estimate your monthly payment:"))
            .child(
                h_flex()
                    .gap_2()
                    .size_full()
                    .child(
                        v_flex()
                            .gap_2()
                            .size_full()
                            .child(make_input_row(&self.home_price, "Home price: $"))
                            .child(make_input_row(&self.down_payment_percent, "Down payment: %"))
                            .child(make_input_row(&self.annual_rate_percent, "Interest rate: %"))
                            .child(make_input_row(&self.annual_taxes, "Annual taxes: $"))
                            .child(make_input_row(&self.monthly_hoa, "Monthly HOA: $"))
                            .child(make_select_row(
                                "Credit score range:",
                                Select::new(&self.credit).w_full().render(window, cx),
                            ))
                            .child(make_select_row(
                                "Loan type:",
                                Select::new(&self.loan_type).w_full().render(window, cx),
                            )),
                    )
                    .child(Self::render_results(estimate)),
            )
    }
}

fn make_select_state(
    values: impl Iterator<Item = &'static str>,
    initial: &str,
    window: &mut Window,
    cx: &mut Context<MortgageForm>,
) -> Entity<SelectState<Vec<SharedString>>> {
    let options: Vec<SharedString> = values.map(SharedString::from).collect();
    let initial_index = options
        .iter()
        .position(|s| s.as_ref() == initial)
        .map(|i| IndexPath::default().row(i));

    cx.new(|cx| SelectState::new(options, initial_index, window, cx))
}

fn make_input_state_with_decimal_mask(
    placeholder: impl Into<SharedString>,
    initial: &str,
    window: &mut Window,
    cx: &mut Context<MortgageForm>,
) -> Entity<InputState> {
    let pattern: MaskPattern = MaskPattern::Number {
        separator: Some(','),
        fraction: Some(2),
    };

    cx.new(|closure_cx| {
        let mut state = InputState::new(window, closure_cx)
            .mask_pattern(pattern)
            .placeholder(placeholder.into());
        state.set_value(initial.to_owned(), window, closure_cx);
        state
    })
}

fn make_input_row(
    state: &Entity<InputState>,
    input_label: impl Into<SharedString>,
) -> Div {
    make_labeled_row(input_label).child(Input::new(state).flex_grow())
}

/// Creates a labeled row containing a text label and an already-rendered
/// [`Select`] dropdown, styled consistently with [`make_input_row`].
fn make_select_row(
    label: impl Into<SharedString>,
    select_element: impl IntoElement,
) -> Div {
    make_labeled_row(label).child(select_element)
}

/// Creates the common outer container and label used by both input and select
/// rows, ensuring consistent alignment, spacing, and border styling.
fn make_labeled_row(label: impl Into<SharedString>) -> Div {
    h_flex()
        .items_center()
        .gap_5()
        .p(px(2.))
        .rounded_md()
        .border_1()
        .child(
            div()
                .min_w(px(150.))
                .text_align(TextAlign::Right)
                .child(label.into()),
        )
}
