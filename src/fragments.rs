//! Shared markup (navigation bar, footer) spliced into every page on load.

use futures::future::join_all;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use crate::conf::{FetchConf, FragmentConf};
use crate::console;
use crate::dom::Page;
use crate::error::{Error, Result};

#[allow(async_fn_in_trait)]
pub trait FetchFragment {
    async fn fetch(&self, path: &str) -> Result<String>;
}

/// Plain GET relative to the current page, no headers.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpFragments;

impl FetchFragment for HttpFragments {
    async fn fetch(&self, path: &str) -> Result<String> {
        let request_error = |err| Error::Request {
            path: path.to_owned(),
            err,
        };

        let response = Request::get(path).send().await.map_err(request_error)?;

        if !response.ok() {
            Err(Error::Status {
                path: path.to_owned(),
                status: response.status(),
            })?
        }

        response.text().await.map_err(request_error)
    }
}

async fn fetch_with_retries<F: FetchFragment>(
    fetcher: &F,
    path: &str,
    policy: FetchConf,
) -> Result<String> {
    let mut attempt = 0;
    loop {
        match fetcher.fetch(path).await {
            Ok(markup) => return Ok(markup),
            Err(err) if attempt < policy.retries => {
                attempt += 1;
                console::warning!("{err}, retry {attempt}/{}", policy.retries);
                if policy.retry_delay_ms > 0 {
                    TimeoutFuture::new(policy.retry_delay_ms).await;
                }
            }
            Err(err) => return Err(err),
        }
    }
}

/// Fetches one fragment and splices it into its placeholder.
///
/// On failure the placeholder is left as it was.
pub async fn include<P, F>(
    page: &P,
    fetcher: &F,
    fragment: &FragmentConf,
    policy: FetchConf,
) -> Result<()>
where
    P: Page,
    F: FetchFragment,
{
    let markup = fetch_with_retries(fetcher, &fragment.source, policy).await?;
    page.substitute(&fragment.placeholder, &markup, fragment.substitution)
}

/// Includes every fragment concurrently; resolves once all of them settled.
pub async fn include_all<'a, P, F>(
    page: &P,
    fetcher: &F,
    fragments: &'a [FragmentConf],
    policy: FetchConf,
) -> Vec<(&'a FragmentConf, Result<()>)>
where
    P: Page,
    F: FetchFragment,
{
    join_all(fragments.iter().map(|fragment| async move {
        (fragment, include(page, fetcher, fragment, policy).await)
    }))
    .await
}
