use crate::controllers::plot::plot_controller;
use crate::controllers::ports::page_presenter::PagePresenterPort;
use crate::controllers::validate_bounds::RawBounds;
use crate::core::data::plot_config::PlotConfig;
use std::error::Error;
use std::fmt;
use std::io::Read;
use std::thread;
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

/// Route served by the plot handler; everything else is a 404.
pub const PLOT_ROUTE: &str = "/mandelbrot";

#[derive(Debug)]
pub enum ServerError {
    Bind(Box<dyn Error + Send + Sync + 'static>),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bind(err) => write!(f, "failed to bind listen address: {}", err),
        }
    }
}

impl Error for ServerError {}

fn html_content_type() -> Header {
    // Static bytes, always parseable
    Header::from_bytes(&b"Content-Type"[..], &b"text/html; charset=utf-8"[..])
        .expect("static content-type header is valid")
}

fn split_url(url: &str) -> (&str, &str) {
    match url.split_once('?') {
        Some((path, query)) => (path, query),
        None => (url, ""),
    }
}

/// Decodes form-urlencoded bytes into the raw zoom bounds. Shared by the
/// query-string and POST-body paths, which must parse identically.
fn raw_bounds_from_form(form: &[u8]) -> RawBounds {
    RawBounds::from_form_pairs(
        form_urlencoded::parse(form).map(|(k, v)| (k.into_owned(), v.into_owned())),
    )
}

/// Extracts the raw zoom bounds from the request: POST bodies are read as
/// form-urlencoded, anything else falls back to the query string.
fn extract_raw_bounds(request: &mut Request) -> RawBounds {
    if *request.method() == Method::Post {
        let mut body = String::new();
        if let Err(err) = request.as_reader().read_to_string(&mut body) {
            log::warn!("failed to read request body: {}", err);
            return RawBounds::default();
        }
        return raw_bounds_from_form(body.as_bytes());
    }

    let (_, query) = split_url(request.url());
    raw_bounds_from_form(query.as_bytes())
}

fn respond(request: Request, response: Response<impl Read>) {
    if let Err(err) = request.respond(response) {
        log::error!("failed to write response: {}", err);
    }
}

/// Handles one request. A rendering or plotting failure is fatal to this
/// response only: it is logged for the operator and answered with a 500,
/// and the process keeps serving.
fn handle_request<P: PagePresenterPort>(mut request: Request, config: &PlotConfig, presenter: &P) {
    let (path, _) = split_url(request.url());
    if path != PLOT_ROUTE {
        respond(
            request,
            Response::from_string("not found").with_status_code(StatusCode(404)),
        );
        return;
    }

    let raw = extract_raw_bounds(&mut request);

    let plot = match plot_controller(&raw, config) {
        Ok(plot) => plot,
        Err(err) => {
            log::error!("plot computation failed: {}", err);
            respond(
                request,
                Response::from_string("internal error").with_status_code(StatusCode(500)),
            );
            return;
        }
    };

    let mut page = Vec::new();
    match presenter.present(&plot, &mut page) {
        Ok(()) => respond(
            request,
            Response::from_data(page).with_header(html_content_type()),
        ),
        Err(err) => {
            log::error!("page rendering failed: {}", err);
            respond(
                request,
                Response::from_string("internal error").with_status_code(StatusCode(500)),
            );
        }
    }
}

/// Binds the listen address and serves plot requests until the process
/// exits. A small fixed pool of accept workers pulls requests off the
/// shared listener so concurrent requests each get their own independent
/// bounds, grid and row workers.
pub fn run_server<P>(addr: &str, config: &PlotConfig, presenter: &P) -> Result<(), ServerError>
where
    P: PagePresenterPort + Sync,
{
    let server = Server::http(addr).map_err(ServerError::Bind)?;
    let workers = thread::available_parallelism()
        .map(|n| n.get().min(8))
        .unwrap_or(4);

    log::info!("listening on http://{}{}", addr, PLOT_ROUTE);

    thread::scope(|scope| {
        for _ in 0..workers {
            scope.spawn(|| loop {
                match server.recv() {
                    Ok(request) => handle_request(request, config, presenter),
                    Err(err) => {
                        log::error!("failed to accept request: {}", err);
                        break;
                    }
                }
            });
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_url_separates_query() {
        assert_eq!(
            split_url("/mandelbrot?xstart=-1.0&xend=0.5"),
            ("/mandelbrot", "xstart=-1.0&xend=0.5")
        );
        assert_eq!(split_url("/mandelbrot"), ("/mandelbrot", ""));
    }

    #[test]
    fn test_query_parses_to_raw_bounds() {
        let (_, query) = split_url("/mandelbrot?xstart=-1.0&xend=0.5&ystart=-0.5&yend=0.5");
        let raw = raw_bounds_from_form(query.as_bytes());

        assert_eq!(raw.xstart.as_deref(), Some("-1.0"));
        assert_eq!(raw.xend.as_deref(), Some("0.5"));
        assert_eq!(raw.ystart.as_deref(), Some("-0.5"));
        assert_eq!(raw.yend.as_deref(), Some("0.5"));
    }

    #[test]
    fn test_post_body_parses_like_query_string() {
        let body = b"xstart=-1.0&xend=0.5&ystart=-0.5&yend=0.5";
        let (_, query) = split_url("/mandelbrot?xstart=-1.0&xend=0.5&ystart=-0.5&yend=0.5");

        let from_body = raw_bounds_from_form(body);
        let from_query = raw_bounds_from_form(query.as_bytes());

        assert_eq!(from_body, from_query);
        assert_eq!(from_body.xstart.as_deref(), Some("-1.0"));
        assert_eq!(from_body.yend.as_deref(), Some("0.5"));
    }

    #[test]
    fn test_form_body_decodes_percent_escapes() {
        // Browsers submit "-1.0" as "-1.0" but a minus may arrive encoded
        let raw = raw_bounds_from_form(b"xstart=%2D1.0&xend=0.5&ystart=-0.5&yend=0.5");

        assert_eq!(raw.xstart.as_deref(), Some("-1.0"));
    }

    #[test]
    fn test_content_type_header_is_valid() {
        let header = html_content_type();

        assert!(header.field.equiv("Content-Type"));
    }
}
