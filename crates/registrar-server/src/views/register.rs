use registrar_core::constants::{MAX_SEMESTER, MIN_SEMESTER};

use super::{error_banner, escape, layout};

/// Values echoed back into the form after a failed sign-up.
#[derive(Debug, Default, Clone)]
pub struct RegisterFormValues {
    pub name: String,
    pub email: String,
    pub student_number: String,
    pub semester: u8,
}

pub fn render(error: Option<&str>, values: &RegisterFormValues) -> String {
    let options: String = (MIN_SEMESTER..=MAX_SEMESTER)
        .map(|s| {
            let selected = if s == values.semester { " selected" } else { "" };
            format!(r#"<option value="{s}"{selected}>Semester {s}</option>"#)
        })
        .collect();
    let body = format!(
        r#"<h1>Student Registration</h1>
{error}
<form method="post" action="/register">
  <label>Name <input type="text" name="name" value="{name}" required></label><br>
  <label>Email <input type="email" name="email" value="{email}" required></label><br>
  <label>Student ID <input type="text" name="studentId" value="{student_number}" required></label><br>
  <label>Semester <select name="semester">{options}</select></label><br>
  <label>Password <input type="password" name="password" required></label><br>
  <button type="submit">Create account</button>
</form>
<p>Already registered? <a href="/login">Log in</a></p>"#,
        error = error_banner(error),
        name = escape(&values.name),
        email = escape(&values.email),
        student_number = escape(&values.student_number),
    );
    layout("Register", &body)
}
