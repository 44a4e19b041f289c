use super::{error_banner, escape, layout};

/// Login form, optionally with an error and the previously typed email.
pub fn render(error: Option<&str>, email: &str) -> String {
    let body = format!(
        r#"<h1>Student Login</h1>
{error}
<form method="post" action="/login">
  <label>Email <input type="email" name="email" value="{email}" required></label><br>
  <label>Password <input type="password" name="password" required></label><br>
  <button type="submit">Log in</button>
</form>
<p>No account yet? <a href="/register">Register</a></p>"#,
        error = error_banner(error),
        email = escape(email),
    );
    layout("Login", &body)
}
