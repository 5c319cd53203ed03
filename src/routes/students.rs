use crate::{
    data::student::Student,
    error::CampusResult,
    maud_conveniences::{escape, render_table},
    state::CampusState,
};
use axum::extract::State;
use maud::{Markup, html};

pub async fn get_students(State(state): State<CampusState>) -> CampusResult<Markup> {
    let students = Student::get_all_by_name(&mut *state.get_connection().await?).await?;

    Ok(state.render(html! {
        div class="mx-auto bg-gray-800 p-8 rounded shadow-md max-w-4xl w-full" {
            (render_table(
                "Students",
                ["ID", "Name", "Email", "Course"],
                students.into_iter()
                    .map(|student| {
                        [
                            escape(student.id.to_string()),
                            escape(student.name),
                            escape(student.email.unwrap_or_else(|| "N/A".to_string())),
                            escape(student.course),
                        ]
                    })
                    .collect(),
            ))
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;

    #[tokio::test]
    async fn seeded_students_are_listed_by_name() {
        let (state, _dir) = test_state().await;
        let page = get_students(State(state)).await.unwrap().into_string();

        let positions: Vec<_> = [
            "David Brown",
            "Jane Smith",
            "John Doe",
            "Mike Johnson",
            "Sarah Wilson",
        ]
        .into_iter()
        .map(|name| page.find(name).unwrap())
        .collect();
        assert!(positions.is_sorted());
        assert!(page.contains("sarah.wilson@email.com"));
    }
}
