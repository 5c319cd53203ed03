use crate::{
    data::{DataType, attendance::AttendanceRecord, fee::FeeStructureEntry, student::Student},
    error::CampusResult,
    maud_conveniences::stat_card,
    state::CampusState,
};
use axum::extract::State;
use maud::{Markup, html};

pub async fn get_index_route(State(state): State<CampusState>) -> CampusResult<Markup> {
    let mut conn = state.get_connection().await?;
    let fee_count = FeeStructureEntry::count(&mut conn).await?;
    let attendance_count = AttendanceRecord::count(&mut conn).await?;
    let student_count = Student::count(&mut conn).await?;
    drop(conn);

    Ok(state.render(html! {
        div class="bg-gray-800 p-8 rounded shadow-md max-w-2xl w-full" {
            h1 class="text-2xl font-semibold mb-6 text-center" {
                "Student Management"
            }

            div class="grid grid-cols-3 gap-4" id="stats" {
                (stat_card("Fee Structures", fee_count, "/view-fees"))
                (stat_card("Attendance Records", attendance_count, "/view-attendance"))
                (stat_card("Students", student_count, "/students"))
            }

            div class="flex flex-row space-x-4 justify-center mt-6" {
                a href="/add-fee" class="bg-slate-600 hover:bg-slate-800 font-bold py-2 px-4 rounded" {
                    "Add Fee"
                }
                a href="/record-attendance" class="bg-slate-600 hover:bg-slate-800 font-bold py-2 px-4 rounded" {
                    "Record Attendance"
                }
            }
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        data::fee::{AddFeeForm, NewFee},
        state::test_state,
    };

    fn count_in(page: &str, label: &str) -> String {
        const VALUE_SPAN: &str = r#"<span class="text-4xl font-bold">"#;
        let label_span = format!(r#"<span class="text-gray-300">{label}</span>"#);

        let before_label = page.split(&label_span).next().unwrap();
        let start = before_label.rfind(VALUE_SPAN).unwrap() + VALUE_SPAN.len();
        before_label[start..].split('<').next().unwrap().to_string()
    }

    #[tokio::test]
    async fn dashboard_counts_track_the_tables() {
        let (state, _dir) = test_state().await;

        let page = get_index_route(State(state.clone()))
            .await
            .unwrap()
            .into_string();
        assert_eq!(count_in(&page, "Fee Structures"), "0");
        assert_eq!(count_in(&page, "Attendance Records"), "0");
        assert_eq!(count_in(&page, "Students"), "5");

        for course in ["Physics", "Biology"] {
            let fee = NewFee::try_from(AddFeeForm {
                course: course.into(),
                amount: "100".into(),
            })
            .unwrap();
            FeeStructureEntry::insert_into_database(fee, &mut *state.get_connection().await.unwrap())
                .await
                .unwrap();
        }

        let page = get_index_route(State(state)).await.unwrap().into_string();
        assert_eq!(count_in(&page, "Fee Structures"), "2");
        assert_eq!(count_in(&page, "Attendance Records"), "0");
    }
}
