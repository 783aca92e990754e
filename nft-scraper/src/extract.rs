use log::debug;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

pub const UNKNOWN_NAME: &str = "Unknown Name";
pub const NOT_LISTED: &str = "Not Listed";

const CARD_SELECTOR: &str = "div.NftItemContainer";
const IMAGE_SELECTOR: &str = "img.LibraryMedia";
const NAME_SELECTOR: &str = "span.NftItemNameContent__name";
const PRICE_SELECTOR: &str = "div.LibraryCryptoPrice__amount";

/// One NFT as written to the output file. Field order is the JSON key order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NftRecord {
    pub name: String,
    pub price: String,
    pub image_url: String,
}

/// Raw fields found inside a single card container, before defaults apply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Card {
    pub image_url: Option<String>,
    pub name: Option<String>,
    pub price: Option<String>,
}

impl Card {
    /// Resolves missing name and price to their placeholders. A card without
    /// an image has nothing worth keeping and yields `None`.
    pub fn into_record(self) -> Option<NftRecord> {
        let image_url = self.image_url?;
        Some(NftRecord {
            name: self.name.unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            price: self.price.unwrap_or_else(|| NOT_LISTED.to_string()),
            image_url,
        })
    }
}

struct CardSelectors {
    card: Selector,
    image: Selector,
    name: Selector,
    price: Selector,
}

impl CardSelectors {
    fn new() -> Self {
        Self {
            card: Selector::parse(CARD_SELECTOR).unwrap(),
            image: Selector::parse(IMAGE_SELECTOR).unwrap(),
            name: Selector::parse(NAME_SELECTOR).unwrap(),
            price: Selector::parse(PRICE_SELECTOR).unwrap(),
        }
    }
}

/// Every card container in document order, including ones with no image.
pub fn extract_cards(html: &str) -> Vec<Card> {
    let document = Html::parse_document(html);
    let selectors = CardSelectors::new();

    document
        .select(&selectors.card)
        .map(|container| read_card(container, &selectors))
        .collect()
}

/// Cards that carry an image, with name and price defaults applied.
pub fn extract_records(html: &str) -> Vec<NftRecord> {
    let cards = extract_cards(html);
    let total = cards.len();

    let records: Vec<NftRecord> = cards.into_iter().filter_map(Card::into_record).collect();

    debug!(
        "matched {} card containers, kept {} with an image",
        total,
        records.len()
    );
    records
}

fn read_card(container: ElementRef, selectors: &CardSelectors) -> Card {
    let image_url = container
        .select(&selectors.image)
        .next()
        .and_then(|img| img.value().attr("src"))
        .filter(|src| !src.is_empty())
        .map(|src| src.to_string());

    let name = container.select(&selectors.name).next().map(stripped_text);
    let price = container.select(&selectors.price).next().map(stripped_text);

    Card {
        image_url,
        name,
        price,
    }
}

// Each text node is trimmed on its own and the pieces are glued back together,
// so "<span> Cool <b>Cat</b></span>" reads as "CoolCat".
fn stripped_text(element: ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}
