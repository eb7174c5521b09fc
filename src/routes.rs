//! Route Table
//!
//! Which scene a path renders, which paths sit behind the auth guard, and the
//! history-fallback rewrites the dev server applies before serving `dist/`.

use serde::{Deserialize, Serialize};

pub const PRODUCT_NAME: &str = "Helium Student Planner";

/// Top-level routed views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scene {
    Home,
    Register,
    Verify,
    Login,
    Logout,
    Forgot,
    Support,
    Terms,
    Privacy,
    Press,
    About,
    Contact,
    Calendar,
    Classes,
    Materials,
    Grades,
    Settings,
    NotFound,
}

impl Scene {
    pub const ALL: [Scene; 18] = [
        Scene::Home,
        Scene::Register,
        Scene::Verify,
        Scene::Login,
        Scene::Logout,
        Scene::Forgot,
        Scene::Support,
        Scene::Terms,
        Scene::Privacy,
        Scene::Press,
        Scene::About,
        Scene::Contact,
        Scene::Calendar,
        Scene::Classes,
        Scene::Materials,
        Scene::Grades,
        Scene::Settings,
        Scene::NotFound,
    ];

    /// Canonical path of the scene (`NotFound` has none)
    pub fn path(self) -> Option<&'static str> {
        let path = match self {
            Scene::Home => "/",
            Scene::Register => "/register",
            Scene::Verify => "/verify",
            Scene::Login => "/login",
            Scene::Logout => "/logout",
            Scene::Forgot => "/forgot",
            Scene::Support => "/support",
            Scene::Terms => "/terms",
            Scene::Privacy => "/privacy",
            Scene::Press => "/press",
            Scene::About => "/about",
            Scene::Contact => "/contact",
            Scene::Calendar => "/planner/calendar",
            Scene::Classes => "/planner/classes",
            Scene::Materials => "/planner/materials",
            Scene::Grades => "/planner/grades",
            Scene::Settings => "/settings",
            Scene::NotFound => return None,
        };
        Some(path)
    }

    /// Page title suffix
    pub fn title(self) -> &'static str {
        match self {
            Scene::Home => "Lightening Your Course Load",
            Scene::Register => "Register",
            Scene::Verify => "Verify",
            Scene::Login => "Login",
            Scene::Logout => "Logout",
            Scene::Forgot => "Forgot Password",
            Scene::Support => "Support",
            Scene::Terms => "Terms of Service",
            Scene::Privacy => "Privacy Policy",
            Scene::Press => "Press",
            Scene::About => "About",
            Scene::Contact => "Contact",
            Scene::Calendar => "Calendar",
            Scene::Classes => "Classes",
            Scene::Materials => "Materials",
            Scene::Grades => "Grades",
            Scene::Settings => "Settings",
            Scene::NotFound => "Not Found",
        }
    }

    /// Full `<title>` text, e.g. `Helium Student Planner | Login`
    pub fn document_title(self) -> String {
        format!("{} | {}", PRODUCT_NAME, self.title())
    }

    pub fn requires_auth(self) -> bool {
        matches!(
            self,
            Scene::Calendar | Scene::Classes | Scene::Materials | Scene::Grades | Scene::Settings
        )
    }
}

/// Outcome of matching a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Scene(Scene),
    Redirect(&'static str),
}

/// Match a path (without query) against the route table
pub fn resolve(path: &str) -> Route {
    let path = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };

    if path == "/planner" {
        return Route::Redirect("/planner/calendar");
    }

    let scene = Scene::ALL
        .into_iter()
        .find(|scene| scene.path() == Some(path))
        .unwrap_or(Scene::NotFound);
    Route::Scene(scene)
}

/// True for paths behind the auth guard
pub fn requires_auth(path: &str) -> bool {
    is_under(path, "/planner") || is_under(path, "/settings")
}

fn is_under(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .map_or(false, |rest| rest.starts_with('/'))
}

/// Paths never remembered as a post-login destination
pub const PRE_AUTH_ROUTES: [&str; 3] = ["/login", "/register", "/forgot-password"];

/// Where the auth guard sends an unauthenticated visitor
pub fn login_redirect(path: &str) -> String {
    if path.is_empty() || PRE_AUTH_ROUTES.contains(&path) {
        "/login".to_string()
    } else {
        format!("/login?next={}", path)
    }
}

/// Dev-server history fallback: the file served for a request path.
///
/// Patterns are prefix matches except `/` and `/planner`, which are exact.
pub fn rewrite(path: &str) -> &'static str {
    const PREFIXES: [(&str, &str); 21] = [
        ("/tour", "/tour.html"),
        ("/register", "/register.html"),
        ("/verify", "/verify.html"),
        ("/login", "/login.html"),
        ("/forgot", "/forgot.html"),
        ("/logout", "/logout.html"),
        ("/support", "/support.html"),
        ("/docs", "/docs.html"),
        ("/status", "/status.html"),
        ("/admin", "/admin.html"),
        ("/about", "/about.html"),
        ("/contact", "/contact.html"),
        ("/press", "/press.html"),
        ("/privacy", "/privacy.html"),
        ("/terms", "/terms.html"),
        ("/settings", "/settings.html"),
        ("/planner/calendar", "/planner/calendar.html"),
        ("/planner/classes", "/planner/classes.html"),
        ("/planner/materials", "/planner/materials.html"),
        ("/planner/grades", "/planner/grades.html"),
        ("/health", "/health.json"),
    ];

    match path {
        "/" => return "/index.html",
        "/planner" => return "/planner.html",
        _ => {}
    }

    PREFIXES
        .iter()
        .find(|(prefix, _)| path.starts_with(prefix))
        .map(|(_, target)| *target)
        .unwrap_or("/404.html")
}

/// First value of `name` in a query string, percent-decoded.
///
/// A leading `?` is ignored; `+` is read as a space.
pub fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| match pair.split_once('=') {
            Some((key, value)) => Some((key, value)),
            None if !pair.is_empty() => Some((pair, "")),
            None => None,
        })
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            let value = value.replace('+', " ");
            urlencoding::decode(&value)
                .map(|v| v.into_owned())
                .unwrap_or(value)
        })
}
