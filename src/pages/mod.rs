//! Server-rendered HTML pages: landing, login, and the protected
//! dashboard.

use axum::{response::Html, Extension};

use crate::middleware::auth::AuthenticatedUser;

const LANDING_HTML: &str = r#"
<html>
<head>
<title>Ultra Premium App</title>
<style>
  body{margin:0;font-family:sans-serif;background:#0f0f0f;color:white;text-align:center}
  header{padding:40px}
  button{
    padding:15px 30px;
    border:none;
    background:linear-gradient(45deg,#6a00ff,#00f0ff);
    color:white;
    font-size:18px;
    border-radius:10px;
    cursor:pointer;
    transition:0.3s;
  }
  button:hover{transform:scale(1.1)}
</style>
</head>
<body>

<header>
  <h1>🚀 Ultra Startup Platform</h1>
  <button onclick="window.location='/login'">Entrar</button>
</header>

</body>
</html>
"#;

const LOGIN_HTML: &str = r#"
<html>
<body style="background:#111;color:white;text-align:center">
<h2>Login</h2>
<input id="email" placeholder="Email"/><br/><br/>
<input id="password" type="password" placeholder="Senha"/><br/><br/>
<button onclick="login()">Entrar</button>

<script>
async function login(){
  const res = await fetch('/api/login',{
    method:'POST',
    headers:{'Content-Type':'application/json'},
    body:JSON.stringify({
      email:document.getElementById('email').value,
      password:document.getElementById('password').value
    })
  })

  const data = await res.json()
  localStorage.setItem("token",data.token)
  window.location="/dashboard"
}
</script>

</body>
</html>
"#;

const DASHBOARD_HTML: &str = r#"
<h1>Bem-vindo ao Dashboard 🔥</h1>
<p>Usuário autenticado com sucesso.</p>
"#;

/// Landing page for GET /
pub async fn landing() -> Html<&'static str> {
    Html(LANDING_HTML)
}

/// Login page for GET /login
pub async fn login_page() -> Html<&'static str> {
    Html(LOGIN_HTML)
}

/// Protected dashboard for GET /dashboard
///
/// Only reachable through the auth middleware, which inserts the
/// authenticated identity into request extensions.
pub async fn dashboard(Extension(user): Extension<AuthenticatedUser>) -> Html<&'static str> {
    tracing::debug!("Dashboard rendered for user {}", user.user_id);
    Html(DASHBOARD_HTML)
}
