//! Status Badges
//!
//! Pill-style badges for course status and participant payment status.

use leptos::*;

/// Badge classes for the canonical course statuses, with a neutral
/// fallback for anything else the server sends.
pub fn status_badge_class(status: &str) -> &'static str {
    match status {
        "Planned" => "bg-blue-100 text-blue-800",
        "Running" => "bg-amber-100 text-amber-800",
        "Completed" => "bg-emerald-100 text-emerald-800",
        "Cancelled" => "bg-red-100 text-red-800",
        _ => "bg-slate-100 text-slate-800",
    }
}

/// Loose classification for the course detail header, where status is
/// server-owned free text (e.g. "Fully booked").
pub fn status_pill(status: &str) -> (String, &'static str) {
    if status.is_empty() {
        return ("Unknown".to_string(), "bg-slate-100 text-slate-600");
    }
    let normalized = status.to_lowercase();
    let class = if normalized.contains("cancel") {
        "bg-red-100 text-red-800"
    } else if normalized.contains("full") {
        "bg-amber-100 text-amber-800"
    } else {
        "bg-emerald-100 text-emerald-800"
    };
    (status.to_string(), class)
}

/// Normalize free-text payment status into the three display buckets.
pub fn payment_badge(status: Option<&str>) -> (&'static str, &'static str) {
    let normalized = status.unwrap_or("Unpaid").to_lowercase();
    if normalized.contains("unpaid") {
        ("Unpaid", "bg-amber-100 text-amber-800")
    } else if normalized.contains("paid") {
        ("Paid", "bg-emerald-100 text-emerald-800")
    } else if normalized.contains("invoice") {
        ("Invoiced", "bg-blue-100 text-blue-800")
    } else {
        ("Unpaid", "bg-amber-100 text-amber-800")
    }
}

/// Course status pill for list tables.
#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let class = status_badge_class(&status);
    view! {
        <span class=format!(
            "inline-flex items-center rounded-full px-2.5 py-1 text-xs font-medium {class}"
        )>
            {status}
        </span>
    }
}

/// Payment status pill for participant rows.
#[component]
pub fn PaymentBadge(status: Option<String>) -> impl IntoView {
    let (label, class) = payment_badge(status.as_deref());
    view! {
        <span class=format!(
            "inline-flex items-center rounded-full px-2 py-0.5 text-[11px] font-medium {class}"
        )>
            {label}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_statuses_have_distinct_classes() {
        assert_eq!(status_badge_class("Planned"), "bg-blue-100 text-blue-800");
        assert_eq!(status_badge_class("Running"), "bg-amber-100 text-amber-800");
        assert_eq!(
            status_badge_class("Completed"),
            "bg-emerald-100 text-emerald-800"
        );
        assert_eq!(status_badge_class("Cancelled"), "bg-red-100 text-red-800");
    }

    #[test]
    fn unknown_status_text_gets_the_neutral_class() {
        assert_eq!(status_badge_class("Rescheduled"), "bg-slate-100 text-slate-800");
    }

    #[test]
    fn status_pill_classifies_free_text() {
        assert_eq!(status_pill("").0, "Unknown");
        assert_eq!(status_pill("Cancelled").1, "bg-red-100 text-red-800");
        assert_eq!(status_pill("Fully booked").1, "bg-amber-100 text-amber-800");
        assert_eq!(status_pill("Open").1, "bg-emerald-100 text-emerald-800");
    }

    #[test]
    fn payment_badge_normalizes_to_three_buckets() {
        assert_eq!(payment_badge(Some("Paid")).0, "Paid");
        assert_eq!(payment_badge(Some("part paid")).0, "Paid");
        assert_eq!(payment_badge(Some("Invoiced")).0, "Invoiced");
        assert_eq!(payment_badge(Some("Unpaid")).0, "Unpaid");
        assert_eq!(payment_badge(Some("tbc")).0, "Unpaid");
        assert_eq!(payment_badge(None).0, "Unpaid");
    }
}
