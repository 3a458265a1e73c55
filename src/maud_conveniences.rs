use crate::controllers::{StatusKind, StatusMessage};
use maud::{Markup, Render, html};
use std::time::Duration;

pub const PRIMARY_BUTTON: &str =
    "bg-blue-600 hover:bg-blue-800 disabled:opacity-50 font-bold py-2 px-4 rounded";
pub const SECONDARY_BUTTON: &str = "bg-slate-600 hover:bg-slate-800 font-bold py-2 px-4 rounded";
pub const DANGER_BUTTON: &str = "bg-red-600 hover:bg-red-800 font-bold py-1 px-3 rounded";

pub fn render_table<const N: usize>(
    titles: [&'static str; N],
    rows: impl IntoIterator<Item = (String, [Markup; N])>,
    empty: Markup,
) -> Markup {
    let mut rows = rows.into_iter().peekable();
    let is_empty = rows.peek().is_none();

    html! {
        div class="overflow-x-auto" {
            table class="min-w-full bg-gray-800 rounded shadow-md" {
                thead class="bg-gray-700" {
                    tr {
                        @for title in titles {
                            th class="py-2 px-4 text-left font-semibold text-gray-300" {(title)}
                        }
                    }
                }
                tbody {
                    @if is_empty {
                        tr {
                            td colspan=(N) class="py-8 px-4 text-center text-gray-400" {(empty)}
                        }
                    }
                    @for (key, row) in rows {
                        tr id={"row-" (key)} {
                            @for col in row {
                                td class="py-2 px-4 border-b border-gray-600 text-gray-200" {(col)}
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn title(s: impl Render) -> Markup {
    html! {
        h2 class="text-2xl font-semibold" {(s)}
    }
}

pub fn subtitle(s: impl Render) -> Markup {
    html! {
        p class="text-gray-400 mb-4" {(s)}
    }
}

/// A labelled text input, with its validation message underneath when there
/// is one. Changes are pushed to `change_url` as they happen.
pub fn text_input(
    id: &str,
    label: &str,
    value: &str,
    placeholder: &str,
    error: Option<&str>,
    change_url: &str,
) -> Markup {
    html! {
        div class="mb-4" {
            label for=(id) class="block text-sm font-bold mb-2 text-gray-300" {(label)}
            input type="text" id=(id) name=(id) value=(value) placeholder=(placeholder)
                hx-post=(change_url) hx-trigger="change" hx-swap="none"
                class="shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600" {}
            @if let Some(error) = error {
                span class="text-red-400 text-sm" {(error)}
            }
        }
    }
}

/// The shared status line. Asks for itself again once a transient message
/// is due to disappear.
pub fn status_banner(message: Option<&StatusMessage>, expires_in: Option<Duration>) -> Markup {
    html! {
        @match message {
            Some(message) => {
                @let colours = match message.kind {
                    StatusKind::Success => "bg-green-100 border-green-400 text-green-700",
                    StatusKind::Failure => "bg-red-100 border-red-400 text-red-700",
                };
                @if let Some(expires_in) = expires_in {
                    div id="status" role="alert" class={"border px-4 py-3 rounded mb-4 " (colours)}
                        hx-get="/internal/status" hx-trigger=(format!("load delay:{}ms", expires_in.as_millis())) hx-swap="outerHTML" {
                        (message.text)
                    }
                } @else {
                    div id="status" role="alert" class={"border px-4 py-3 rounded mb-4 " (colours)} {
                        (message.text)
                    }
                }
            }
            None => {
                div id="status" {}
            }
        }
    }
}
