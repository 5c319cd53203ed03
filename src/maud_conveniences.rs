use maud::{Escaper, Markup, PreEscaped, Render, html};
use std::fmt::Write;

const NAV_LINKS: [(&str, &str); 6] = [
    ("/", "Dashboard"),
    ("/students", "Students"),
    ("/add-fee", "Add Fee"),
    ("/view-fees", "Fees"),
    ("/record-attendance", "Record Attendance"),
    ("/view-attendance", "Attendance"),
];

pub fn render_nav() -> Markup {
    html! {
        nav class="w-full bg-gray-800 shadow-md px-8 py-4 flex flex-row space-x-4" {
            @for (href, name) in NAV_LINKS {
                a href=(href) class="hover:text-blue-300 font-semibold" {(name)}
            }
        }
    }
}

pub fn render_table<const N: usize>(
    overall_title: &'static str,
    titles: [&'static str; N],
    items: Vec<[Markup; N]>,
) -> Markup {
    html! {
        div class="container mx-auto" {
            (title(overall_title))
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
                        @if items.is_empty() {
                            tr {
                                td colspan=(N) class="py-2 px-4 italic text-gray-400" {"Nothing here yet"}
                            }
                        }
                        @for row in items {
                            tr {
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
}

pub fn escape(s: impl AsRef<str>) -> PreEscaped<String> {
    let mut output = String::new();
    Escaper::new(&mut output).write_str(s.as_ref()).unwrap(); //this method always succeeds - strange api!
    PreEscaped(output)
}

pub fn title(s: impl Render) -> Markup {
    html! {
        h1 class="text-2xl font-semibold mb-4" {(s)}
    }
}

pub fn form_element(id: &'static str, label: &'static str, element: Markup) -> Markup {
    html! {
        div class="mb-4" {
            label for=(id) class="block text-sm font-bold mb-2 text-gray-300" {(label)}
            (element)
        }
    }
}

pub fn simple_form_element(
    id: &'static str,
    label: &'static str,
    required: bool,
    input_type: Option<&'static str>,
    step: Option<&'static str>,
) -> Markup {
    form_element(
        id,
        label,
        html! {
            input required[required] type=(input_type.unwrap_or("text")) step=[step] id=(id) name=(id) class="shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600" {}
        },
    )
}

pub fn form_select<T: Render, U: Render>(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    options: impl IntoIterator<Item = (T, U)>,
) -> Markup {
    form_element(
        id,
        label,
        html! {
            select required id=(id) name=(id) class="shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600" {
                option value="" {(placeholder)}
                @for (value, shown) in options {
                    option value=(value) {(shown)}
                }
            }
        },
    )
}

pub fn form_submit_button(text: Option<&'static str>) -> Markup {
    html! {
        div class="flex items-center justify-between" {
            button type="submit" class="bg-blue-500 hover:bg-blue-700 font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline" {
                (text.unwrap_or("Submit"))
            }
        }
    }
}

pub fn stat_card(label: &'static str, value: impl Render, href: &'static str) -> Markup {
    html! {
        a href=(href) class="bg-slate-700 hover:bg-slate-600 rounded p-6 flex flex-col items-center" {
            span class="text-4xl font-bold" {(value)}
            span class="text-gray-300" {(label)}
        }
    }
}
