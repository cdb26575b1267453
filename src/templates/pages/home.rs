// templates/pages/home.rs

use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "Home",
        html! {
            main class="container" {
                h1 { "Find your next rental" }

                form method="get" action="/search" class="hero-search" {
                    input type="text" name="location" placeholder="City or neighborhood";
                    button type="submit" class="primary" { "Search" }
                }

                (card("Browse everything", html! {
                    p { "See every listing on the map: " a href="/search" { "open search" } "." }
                }))
            }
        },
    )
}
