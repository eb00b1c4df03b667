//! Chat message text for a computation.

use crate::ports::{ComputationSummary, NotificationTarget};

/// HTML-mode text announcing a computation on the target's calculator.
///
/// A blank calculator name is replaced by `fallback_name`.
pub fn render_summary(
    target: &NotificationTarget,
    fallback_name: &str,
    summary: &ComputationSummary,
) -> String {
    let name = if target.calculator_name.trim().is_empty() {
        fallback_name
    } else {
        target.calculator_name.as_str()
    };

    let header = format!(
        "📦 Новый расчёт по калькулятору «{}» ({})\n\n",
        escape(name),
        target.calculator_type
    );

    let body = match summary {
        ComputationSummary::Distance {
            from,
            to,
            vehicle,
            round_trip,
            distance_km,
            total,
        } => format!(
            "Откуда: {}\nКуда: {}\nТранспорт: {}\nМаршрут: {}\nРасстояние: {:.1} км\nИтого: {:.0} ₽",
            escape(from),
            escape(to),
            escape(vehicle),
            if *round_trip { "туда-обратно" } else { "в одну сторону" },
            distance_km,
            total
        ),
        ComputationSummary::Layered {
            selected_option_ids,
            total,
        } => {
            let options = if selected_option_ids.is_empty() {
                "базовая комплектация".to_string()
            } else {
                escape(&selected_option_ids.join(", "))
            };
            format!("Опции: {}\nИтого: {:.0} ₽", options, total)
        }
        ComputationSummary::Mortgage {
            amount,
            rate,
            years,
            monthly,
        } => format!(
            "Сумма: {:.0} ₽\nСтавка: {}%\nСрок: {} лет\nЕжемесячный платёж: {:.2} ₽",
            amount, rate, years, monthly
        ),
    };

    header + &body
}

/// Minimal escaping for the bot API's HTML parse mode.
fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
