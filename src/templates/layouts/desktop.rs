use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = r#"
body { font-family: "Source Sans Pro", system-ui, sans-serif; margin: 0; color: #262730; }
header { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
header nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }
main.container { max-width: 960px; margin: 2rem auto; padding: 0 1rem; }
.card { border: 1px solid #e6e6e6; border-radius: 8px; padding: 1rem; margin-bottom: 1rem; }
.map { position: relative; width: 100%; height: 560px; margin: 1rem 0; }
.caption { font-style: italic; color: #555; }
.muted { color: #777; font-size: 0.9rem; }
table.raw { border-collapse: collapse; font-size: 0.85rem; width: 100%; }
table.raw th, table.raw td { border-bottom: 1px solid #eee; padding: 4px 8px; text-align: right; }
.raw-wrap { max-height: 400px; overflow: auto; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                header {
                    h3 { "NYC Rentals" }
                    nav {
                        ul {
                            li { a href="/" { "Properties" } }
                            li { a href="/incidents" { "Shootings" } }
                            li { a href="/trees" { "Trees" } }
                        }
                    }
                    form action="/refresh" method="post" {
                        button type="submit" title="Fetch the datasets again" { "Reload data" }
                    }
                }
                (content)
            }
        }
    }
}
