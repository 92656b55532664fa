use log::info;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Request, Response};

/// Logs one line per request once it is answered: the handler that served it
/// (or `catcher` when none matched), the outcome status and the declared body type.
pub struct RequestLogger;

#[rocket::async_trait]
impl Fairing for RequestLogger {
    fn info(&self) -> Info {
        Info {
            name: "Request Logger",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        info!(
            "{} {} -> {} [{}] content-type={} {}",
            req.method(),
            req.uri(),
            res.status(),
            handler_name(req),
            req.content_type()
                .map(|ct| ct.to_string())
                .unwrap_or_else(|| "-".to_string()),
            req.headers().get_one("User-Agent").unwrap_or("Unknown")
        );
    }
}

fn handler_name<'a>(req: &'a Request<'_>) -> &'a str {
    req.route()
        .and_then(|route| route.name.as_deref())
        .unwrap_or("catcher")
}
