use crate::error::TranscrapeError;

use log::debug;

/// Browser identity sent with every request. YouTube serves a script-free
/// page, without the embedded player response, to clients it does not
/// recognise.
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// What a single GET yielded: the status code and the body as text.
#[derive(Debug)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

/// The seam between the pipeline and the network. Tests drive the pipeline
/// through this trait with canned documents instead of live requests.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<Response, TranscrapeError>;
}

/// Blocking HTTP client with the spoofed user agent. One instance serves
/// both requests of a run.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, TranscrapeError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<Response, TranscrapeError> {
        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(Response { status, body })
    }
}

/// Fetches the watch page for a video. The status code is not inspected
/// here; an error page simply carries no player response and surfaces at the
/// extraction step.
pub fn watch_page<F: Fetch>(fetcher: &F, video_id: &str) -> Result<String, TranscrapeError> {
    let url = format!("https://www.youtube.com/watch?v={}", video_id);
    debug!("fetching watch page {}", url);
    Ok(fetcher.get(&url)?.body)
}
