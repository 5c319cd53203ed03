use crate::{
    data::{
        DataType,
        attendance::{AttendanceRecord, NewAttendance, RecordAttendanceForm},
        fee::FeeStructureEntry,
        student::Student,
    },
    error::CampusResult,
    maud_conveniences::{escape, form_select, form_submit_button, render_table, title},
    state::CampusState,
};
use axum::{Form, extract::State, response::Redirect};
use chrono::Local;
use maud::{Markup, html};

const STATUSES: [&str; 3] = ["Present", "Absent", "Late"];

pub async fn get_record_attendance(State(state): State<CampusState>) -> CampusResult<Markup> {
    let mut conn = state.get_connection().await?;
    let courses = FeeStructureEntry::get_distinct_courses(&mut conn).await?;
    let students = Student::get_all_by_name(&mut conn).await?;
    drop(conn);

    Ok(state.render(html! {
        div class="bg-gray-800 shadow-md rounded px-8 pt-6 pb-8 mb-4 w-full max-w-md" {
            (title("Record Attendance"))
            @if courses.is_empty() {
                p class="italic text-gray-400 mb-4" {
                    "No courses yet - "
                    a href="/add-fee" class="hover:text-blue-300 underline" {"add a fee structure"}
                    " first."
                }
            }
            form method="post" action="/record-attendance" {
                (form_select(
                    "student_id",
                    "Student",
                    "Select a Student",
                    students.iter().map(|student| (student.id, html! {(student.name) " (" (student.course) ")"})),
                ))
                (form_select(
                    "course",
                    "Course",
                    "Select a Course",
                    courses.iter().map(|course| (course, course)),
                ))
                (form_select(
                    "status",
                    "Status",
                    "Select a Status",
                    STATUSES.map(|status| (status, status)),
                ))
                (form_submit_button(Some("Record Attendance")))
            }
        }
    }))
}

pub async fn post_record_attendance(
    State(state): State<CampusState>,
    Form(form): Form<RecordAttendanceForm>,
) -> CampusResult<Redirect> {
    let today = Local::now().date_naive();
    let attendance = NewAttendance::from_form(form, today);
    let student_id = attendance.student_id;

    let id = AttendanceRecord::insert_into_database(
        attendance,
        &mut *state.get_connection().await?,
    )
    .await?;
    info!(id, student_id, %today, "Recorded attendance");

    Ok(Redirect::to("/record-attendance"))
}

pub async fn get_view_attendance(State(state): State<CampusState>) -> CampusResult<Markup> {
    let records =
        AttendanceRecord::get_all_with_student_names(&mut *state.get_connection().await?).await?;

    Ok(state.render(html! {
        div class="mx-auto bg-gray-800 p-8 rounded shadow-md max-w-4xl w-full" {
            (render_table(
                "Attendance",
                ["ID", "Student", "Course", "Date", "Status"],
                records.into_iter()
                    .map(|record| {
                        [
                            escape(record.id.to_string()),
                            escape(record.student_name),
                            escape(record.course),
                            escape(record.date.format("%Y-%m-%d").to_string()),
                            escape(record.status),
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
    use crate::{
        data::fee::NewFee,
        state::test_state,
    };
    use axum::{http::StatusCode, response::IntoResponse};

    fn form(student_id: i64, course: &str, status: &str) -> Form<RecordAttendanceForm> {
        Form(RecordAttendanceForm {
            student_id,
            course: course.to_string(),
            status: status.to_string(),
        })
    }

    fn cell(text: &str) -> String {
        format!(r#"<td class="py-2 px-4 border-b border-gray-600 text-gray-200">{text}</td>"#)
    }

    #[tokio::test]
    async fn recorded_attendance_is_listed_with_name_and_today() {
        let (state, _dir) = test_state().await;

        let response = post_record_attendance(
            State(state.clone()),
            form(1, "Computer Science", "Present"),
        )
        .await
        .unwrap()
        .into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/record-attendance");

        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        let page = get_view_attendance(State(state)).await.unwrap().into_string();
        let row = [
            cell("John Doe"),
            cell("Computer Science"),
            cell(&today),
            cell("Present"),
        ]
        .concat();
        assert!(page.contains(&row), "{page}");
    }

    #[tokio::test]
    async fn unknown_student_is_a_bad_request() {
        let (state, _dir) = test_state().await;

        let error = post_record_attendance(State(state.clone()), form(42, "Physics", "Present"))
            .await
            .unwrap_err();
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);

        let mut conn = state.get_connection().await.unwrap();
        assert_eq!(AttendanceRecord::count(&mut conn).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn form_lists_each_course_once_in_order() {
        let (state, _dir) = test_state().await;
        {
            let mut conn = state.get_connection().await.unwrap();
            for course in ["Physics", "Computer Science", "Physics", "Biology"] {
                FeeStructureEntry::insert_into_database(
                    NewFee {
                        course: course.to_string(),
                        amount: 250.0,
                    },
                    &mut conn,
                )
                .await
                .unwrap();
            }
        }

        let page = get_record_attendance(State(state)).await.unwrap().into_string();
        let course_select = page
            .split(r#"<select required id="course""#)
            .nth(1)
            .unwrap()
            .split("</select>")
            .next()
            .unwrap();

        assert_eq!(course_select.matches("<option").count(), 4);
        assert_eq!(course_select.matches(r#"value="Physics""#).count(), 1);
        let biology = course_select.find("Biology").unwrap();
        let computer_science = course_select.find("Computer Science").unwrap();
        let physics = course_select.find("Physics").unwrap();
        assert!(biology < computer_science && computer_science < physics);

        assert!(page.contains(r#"<option value="1">John Doe (Computer Science)</option>"#));
        assert!(!page.contains("No courses yet"));
    }
}
