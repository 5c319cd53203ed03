use crate::{
    data::{
        DataType,
        fee::{AddFeeForm, FeeStructureEntry, NewFee},
    },
    error::CampusResult,
    maud_conveniences::{escape, form_submit_button, render_table, simple_form_element, title},
    state::CampusState,
};
use axum::{Form, extract::State, response::Redirect};
use maud::{Markup, html};

pub async fn get_add_fee(State(state): State<CampusState>) -> Markup {
    state.render(html! {
        div class="bg-gray-800 shadow-md rounded px-8 pt-6 pb-8 mb-4 w-full max-w-sm" {
            (title("Add Fee Structure"))
            form method="post" action="/add-fee" {
                (simple_form_element("course", "Course", true, None, None))
                (simple_form_element("amount", "Amount", true, Some("number"), Some("0.01")))
                (form_submit_button(Some("Add Fee")))
            }
        }
    })
}

pub async fn post_add_fee(
    State(state): State<CampusState>,
    Form(form): Form<AddFeeForm>,
) -> CampusResult<Redirect> {
    let fee = NewFee::try_from(form)?;
    let id = FeeStructureEntry::insert_into_database(
        fee.clone(),
        &mut *state.get_connection().await?,
    )
    .await?;
    info!(id, course = %fee.course, amount = fee.amount, "Added fee");

    Ok(Redirect::to("/add-fee"))
}

pub async fn get_view_fees(State(state): State<CampusState>) -> CampusResult<Markup> {
    let fees = FeeStructureEntry::get_all(&mut *state.get_connection().await?).await?;

    Ok(state.render(html! {
        div class="mx-auto bg-gray-800 p-8 rounded shadow-md max-w-4xl w-full" {
            (render_table(
                "Fee Structure",
                ["ID", "Course", "Amount"],
                fees.into_iter()
                    .map(|fee| {
                        [
                            escape(fee.id.to_string()),
                            escape(fee.course),
                            escape(fee.amount.to_string()),
                        ]
                    })
                    .collect(),
            ))
        }
    }))
}
