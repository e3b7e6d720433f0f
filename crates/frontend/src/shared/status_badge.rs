//! Status and payment chips for the bookings table.

use contracts::shared::humanize_code;
use leptos::prelude::*;

fn status_colors(code: &str) -> &'static str {
    match code {
        "open" => "background: #dbeafe; color: #1d4ed8; border-color: #bfdbfe;",
        "rescheduled" => "background: #ffedd5; color: #c2410c; border-color: #fed7aa;",
        "verified" => "background: #fef9c3; color: #a16207; border-color: #fef08a;",
        "root_manager" => "background: #e0e7ff; color: #4338ca; border-color: #c7d2fe;",
        "phlebo" => "background: #fef3c7; color: #b45309; border-color: #fde68a;",
        "sample_collected" => "background: #cffafe; color: #0e7490; border-color: #a5f3fc;",
        "payment_collected" => "background: #d1fae5; color: #065f46; border-color: #6ee7b7;",
        "report_uploaded" => "background: #ede9fe; color: #6d28d9; border-color: #ddd6fe;",
        "health_manager" => "background: #ccfbf1; color: #115e59; border-color: #99f6e4;",
        "dietitian" => "background: #fce7f3; color: #9d174d; border-color: #fbcfe8;",
        "completed" => "background: #dcfce7; color: #15803d; border-color: #bbf7d0;",
        "failed" | "cancelled" => "background: #fee2e2; color: #b91c1c; border-color: #fecaca;",
        _ => "background: #f3f4f6; color: #374151; border-color: #e5e7eb;",
    }
}

fn payment_colors(code: &str) -> &'static str {
    match code {
        "success" => "background: #dcfce7; color: #15803d; border-color: #bbf7d0;",
        "initiated" | "verified" => "background: #fef9c3; color: #a16207; border-color: #fef08a;",
        "failed" | "cancelled" => "background: #fee2e2; color: #b91c1c; border-color: #fecaca;",
        _ => "background: #f3f4f6; color: #374151; border-color: #e5e7eb;",
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] code: String) -> impl IntoView {
    let label = humanize_code(&code.to_lowercase());
    let colors = status_colors(&code.to_lowercase());
    view! {
        <span style=format!(
            "display: inline-block; text-align: center; padding: 2px 10px; min-width: 120px; border-radius: 9999px; border: 1px solid; font-size: 12px; font-weight: 500; {colors}"
        )>
            {label}
        </span>
    }
}

#[component]
pub fn PaymentBadge(#[prop(into)] code: String) -> impl IntoView {
    let label = humanize_code(&code.to_lowercase());
    let colors = payment_colors(&code.to_lowercase());
    view! {
        <span style=format!(
            "display: inline-block; text-align: center; padding: 2px 10px; min-width: 80px; border-radius: 9999px; border: 1px solid; font-size: 12px; font-weight: 500; {colors}"
        )>
            {label}
        </span>
    }
}
