//! Standalone HTML page for a scraped article.
//!
//! Title and content are inserted verbatim: the content is already an HTML
//! fragment from the extraction tool, and the title goes in as the tool gave it.

use crate::scrape::Article;

const STYLESHEET: &str = r#"        body {
            font-family: system-ui, sans-serif;
            background: #f7f7f7;
            color: #222;
            padding: 2rem;
            max-width: 800px;
            margin: auto;
            line-height: 1.6;
        }
        table {
            border-collapse: collapse;
            width: 100%;
            margin: 1em 0;
        }
        table th, table td {
            border: 1px solid #ccc;
            padding: 0.5em;
        }
        table tr:nth-child(even) {
            background-color: #f2f2f2;
        }
        pre {
            background: #eee;
            padding: 1em;
            overflow-x: auto;
        }
"#;

/// Renders `article` into the fixed page template.
pub fn render_article(article: &Article) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>
{style}    </style>
</head>
<body>
    {content}
</body>
</html>
"#,
        title = article.title,
        style = STYLESHEET,
        content = article.content,
    )
}
