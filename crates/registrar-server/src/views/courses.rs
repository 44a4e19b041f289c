use registrar_core::constants::{MAX_SEMESTER, MIN_SEMESTER};
use registrar_core::models::{Course, CreditSummary};

use super::{escape, layout};

/// Everything the course dashboard shows.
#[derive(Debug, Clone)]
pub struct CoursesPage {
    pub user_name: String,
    pub summary: CreditSummary,
    pub registered_courses: Vec<Course>,
    pub available_courses: Vec<Course>,
}

const SCRIPT: &str = r#"<script>
async function post(url, body) {
  const init = { method: 'POST', headers: { 'Content-Type': 'application/json' } };
  if (body !== undefined) init.body = JSON.stringify(body);
  const res = await fetch(url, init);
  const json = await res.json();
  if (!json.success) { alert(json.message); return; }
  location.reload();
}
document.querySelectorAll('[data-register]').forEach(b =>
  b.addEventListener('click', () => post('/register-course/' + b.dataset.register)));
document.querySelectorAll('[data-unregister]').forEach(b =>
  b.addEventListener('click', () => post('/unregister-course/' + b.dataset.unregister)));
const sem = document.getElementById('semester');
if (sem) sem.addEventListener('change', () => post('/update-semester', { semester: Number(sem.value) }));
</script>"#;

fn course_rows(courses: &[Course], action: &str, label: &str) -> String {
    if courses.is_empty() {
        return r#"<tr><td colspan="6">None</td></tr>"#.to_string();
    }
    courses
        .iter()
        .map(|c| {
            format!(
                r#"<tr><td>{code}</td><td>{name}</td><td>{credits}</td><td>{kind}</td><td>{semester}</td><td><button data-{action}="{id}">{label}</button></td></tr>"#,
                code = escape(&c.code),
                name = escape(&c.name),
                credits = c.credits,
                kind = c.course_type,
                semester = c.semester,
                id = escape(c.id.as_str()),
            )
        })
        .collect()
}

pub fn render(page: &CoursesPage) -> String {
    let summary = &page.summary;
    let options: String = (MIN_SEMESTER..=MAX_SEMESTER)
        .map(|s| {
            let selected = if s == summary.semester.value() { " selected" } else { "" };
            format!(r#"<option value="{s}"{selected}>{s}</option>"#)
        })
        .collect();
    let remaining_class = if summary.remaining_credits < 0 { "over" } else { "" };
    let header = "<tr><th>Code</th><th>Name</th><th>Credits</th><th>Type</th><th>Semester</th><th></th></tr>";

    let body = format!(
        r#"<h1>Welcome, {name}</h1>
<p><a href="/logout">Log out</a></p>
<div class="summary">
  <span>Semester <select id="semester">{options}</select></span>
  <span>Credit limit: {limit}</span>
  <span>Registered: {total}</span>
  <span class="{remaining_class}">Remaining: {remaining}</span>
</div>
<h2>Registered courses</h2>
<table>{header}{registered}</table>
<h2>Available courses</h2>
<table>{header}{available}</table>
{script}"#,
        name = escape(&page.user_name),
        limit = summary.credit_limit,
        total = summary.total_credits,
        remaining = summary.remaining_credits,
        registered = course_rows(&page.registered_courses, "unregister", "Drop"),
        available = course_rows(&page.available_courses, "register", "Register"),
        script = SCRIPT,
    );
    layout("Courses", &body)
}
