//! Shared test utilities and fixtures.

#![allow(dead_code)]

use scour::{HtmlDocument, LiveSearch, LiveSearchConfig, Record};

// Re-export canonical test utilities from scour::testing
pub use scour::testing::{make_record, make_reports, CountingListeners, MemoryTree};

/// A corporate home page: navigation in the header, a search box, a few
/// content sections with repeated and nested text.
pub const COMPANY_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Copperbelt Mining Group</title>
  <style>p { color: #333; }</style>
</head>
<body>
  <header>
    <nav>
      <a href="/about">About Copperbelt Mining Group</a>
      <a href="/operations">Copper operations overview</a>
    </nav>
    <div id="site-search" class="search-box">
      <input type="text" placeholder="Search...">
      <ul class="results"><li>Copper results would render here</li></ul>
    </div>
  </header>
  <main>
    <h1>Copper for the energy transition</h1>
    <p>Our Kolwezi concentrator processes copper and cobalt ore around the clock.</p>
    <p>Our Kolwezi concentrator processes copper and cobalt ore around the clock.</p>
    <section id="safety">
      <h2>Health &amp; Safety</h2>
      <p>Zero harm is our first value: every shift starts with a safety briefing.</p>
      <ul>
        <li><a href="/reports/sustainability">Sustainability report for copper operations</a></li>
      </ul>
    </section>
    <p>Ok.</p>
    <span>Cu</span>
    <script>var copperTracking = "should never be searched";</script>
  </main>
  <footer>
    <p>Copperbelt Mining Group, Lubumbashi, Democratic Republic of the Congo</p>
  </footer>
</body>
</html>"#;

pub fn company_page() -> HtmlDocument {
    HtmlDocument::parse(COMPANY_PAGE).expect("fixture page parses")
}

/// Default live search (selectors, exclusions and bounds as shipped).
pub fn live_search() -> LiveSearch {
    LiveSearch::new(LiveSearchConfig::default())
}

/// Live search that excludes nothing, for tests about other exclusions.
pub fn live_search_without_regions() -> LiveSearch {
    LiveSearch::new(LiveSearchConfig {
        excluded_regions: Vec::new(),
        ..LiveSearchConfig::default()
    })
}

/// A flat page of `n` distinct paragraphs that all mention copper.
pub fn copper_paragraphs(n: usize) -> MemoryTree {
    let tree = MemoryTree::new();
    for i in 0..n {
        tree.push(
            "p",
            &format!("Paragraph number {i} talks about copper cathodes."),
            None,
        );
    }
    tree
}

/// The affiliations catalog: title plus organization type.
pub fn affiliations() -> Vec<Record> {
    vec![
        make_record("ICA", "International Copper Association", "Industry Association"),
        make_record("CDI", "Cobalt Institute", "Industry Association"),
        make_record("FEC", "Federation of Congolese Enterprises", "Business Federation"),
        make_record("CMC", "Chamber of Mines of Congo", "Industry Chamber"),
        make_record("EIT", "Extractive Industries Transparency Initiative", "Transparency Initiative"),
        make_record("UNG", "UN Global Compact", "Sustainability Network"),
        make_record("RMI", "Responsible Minerals Initiative", "Sustainability Network"),
        make_record("ICM", "International Council on Mining and Metals", "Industry Council"),
    ]
}

/// Catalog JSON as a site would ship it.
pub const REPORTS_JSON: &str = r#"[
  { "id": "AR-2023", "title": "Annual Report 2023", "type": "PDF" },
  { "id": "AR-2022", "title": "Annual Report 2022", "type": "PDF" },
  { "id": "SR-2023", "title": "Sustainability Report 2023", "type": "PDF" },
  { "id": "SR-2022", "title": "Sustainability Report 2022", "type": "PDF" },
  { "id": "TR-2023", "title": "Tax Transparency Report 2023", "type": "PDF" },
  { "id": "HS-2023", "title": "Health and Safety Performance 2023", "type": "PDF" },
  { "id": "CR-2023", "title": "Community Relations Review", "type": "Web" },
  { "id": "WR-2023", "title": "Water Stewardship Report", "type": "Web" }
]"#;
