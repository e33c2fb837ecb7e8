//! LinkedIn guest-jobs adapter: search results page → job ids → one page per posting.

use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, info, warn};

use crate::models::{PostingMetadata, RawPosting};
use crate::posting::html::{element_text, selector};
use crate::posting::PostingBlocks;
use crate::sources::{PostingQuery, PostingSource, SourceError};

pub const DEFAULT_BASE_URL: &str = "https://www.linkedin.com/jobs-guest/jobs/api";

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

static JOB_CARD: Lazy<Selector> = Lazy::new(|| selector("li"));
static BASE_CARD: Lazy<Selector> = Lazy::new(|| selector("div.base-card"));
static CARD_LINK: Lazy<Selector> = Lazy::new(|| selector("a.base-card__full-link"));

static TITLE: Lazy<Selector> = Lazy::new(|| selector("h2.top-card-layout__title"));
static COMPANY: Lazy<Selector> = Lazy::new(|| selector("a.topcard__org-name-link"));
static LOCATION: Lazy<Selector> =
    Lazy::new(|| selector("span.topcard__flavor.topcard__flavor--bullet"));
static TIME_POSTED: Lazy<Selector> = Lazy::new(|| selector("span.posted-time-ago__text"));
static APPLICANTS: Lazy<Selector> = Lazy::new(|| {
    selector("span.num-applicants__caption, figcaption.num-applicants__caption")
});

/// A search hit: the posting id and, when present, its public apply link.
#[derive(Debug, Clone, PartialEq, Eq)]
struct JobCard {
    job_id: String,
    link: Option<String>,
}

pub struct LinkedInPostingSource {
    client: Client,
    base_url: String,
}

impl LinkedInPostingSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn get_html(&self, url: &str, query: &[(&str, &str)]) -> Result<String, SourceError> {
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl PostingSource for LinkedInPostingSource {
    async fn fetch_posting_blocks(&self, query: &PostingQuery) -> Result<Vec<RawPosting>, SourceError> {
        let search_url = format!("{}/seeMoreJobPostings/search", self.base_url);
        let listing = self
            .get_html(
                &search_url,
                &[
                    ("keywords", query.keywords.as_str()),
                    ("location", query.location.as_str()),
                    ("f_TP", "1"),
                ],
            )
            .await?;

        let cards = parse_job_cards(&listing);
        info!(
            keywords = %query.keywords,
            location = %query.location,
            found = cards.len(),
            "job search completed"
        );

        let mut postings = Vec::with_capacity(cards.len());
        for card in cards {
            let url = format!("{}/jobPosting/{}", self.base_url, card.job_id);
            match self.get_html(&url, &[]).await {
                Ok(page) => postings.push(parse_job_page(&page, card)),
                // One unreachable posting should not sink the whole search.
                Err(e) => warn!(job_id = %card.job_id, error = %e, "skipping posting"),
            }
        }

        Ok(postings)
    }
}

/// Job ids come from `data-entity-urn="urn:li:jobPosting:<id>"`. Duplicates keep
/// their first position.
fn parse_job_cards(html: &str) -> Vec<JobCard> {
    let document = Html::parse_fragment(html);
    let mut cards: Vec<JobCard> = Vec::new();

    for item in document.select(&JOB_CARD) {
        let Some(job_id) = item
            .select(&BASE_CARD)
            .next()
            .and_then(|card| card.value().attr("data-entity-urn"))
            .and_then(|urn| urn.split(':').nth(3))
            .map(str::to_string)
        else {
            debug!("list item without a job urn");
            continue;
        };

        if cards.iter().any(|c| c.job_id == job_id) {
            continue;
        }

        let link = item
            .select(&CARD_LINK)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(str::to_string);

        cards.push(JobCard { job_id, link });
    }

    cards
}

fn parse_job_page(html: &str, card: JobCard) -> RawPosting {
    let document = Html::parse_document(html);
    let text_of = |sel: &Selector| {
        document
            .select(sel)
            .next()
            .map(|el| element_text(&el))
            .filter(|t| !t.is_empty())
    };

    let metadata = PostingMetadata {
        title: text_of(&TITLE),
        company: text_of(&COMPANY),
        location: text_of(&LOCATION),
        time_posted: text_of(&TIME_POSTED),
        applicants: text_of(&APPLICANTS),
        apply_link: card.link,
        job_id: Some(card.job_id),
    };
    let blocks = PostingBlocks::from_document(&document);

    RawPosting { metadata, blocks }
}
