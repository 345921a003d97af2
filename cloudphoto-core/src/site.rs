use crate::album::Album;

pub const INDEX_DOCUMENT: &str = "index.html";
pub const ERROR_DOCUMENT: &str = "error.html";

const GALLERIA_HEAD: &str = concat!(
    r#"<link rel="stylesheet" type="text/css" href="https://cdnjs.cloudflare.com/ajax/libs/galleria/1.6.1/themes/classic/galleria.classic.min.css" />"#,
    "\n",
    r#"<style>.galleria{ width: 960px; height: 540px; background: #000 }</style>"#,
    "\n",
    r#"<script src="https://ajax.googleapis.com/ajax/libs/jquery/3.6.0/jquery.min.js"></script>"#,
    "\n",
    r#"<script src="https://cdnjs.cloudflare.com/ajax/libs/galleria/1.6.1/galleria.min.js"></script>"#,
    "\n",
    r#"<script src="https://cdnjs.cloudflare.com/ajax/libs/galleria/1.6.1/themes/classic/galleria.classic.min.js"></script>"#,
);

/// One entry of the publishing plan: an album and the page file showing it.
///
/// The same plan drives index rendering, page rendering, and upload, so
/// index links and page names cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumPage {
    pub album: Album,
    pub file_name: String,
}

/// Assigns each album its page file, `album<N>.html` by enumeration order.
pub fn plan_pages(albums: Vec<Album>) -> Vec<AlbumPage> {
    albums
        .into_iter()
        .enumerate()
        .map(|(index, album)| AlbumPage {
            album,
            file_name: format!("album{index}.html"),
        })
        .collect()
}

/// The archive index: one link per album, in plan order.
pub fn render_index(pages: &[AlbumPage]) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head><title>Photo archive</title></head>\n<body>\n<h1>Photo archive</h1>\n<ul>\n",
    );
    for page in pages {
        html.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            page.file_name, page.album
        ));
    }
    html.push_str("</ul>\n</body>\n</html>\n");
    html
}

/// A single album's gallery page: one image per key under the album's
/// prefix, captioned with the photo filename. Keys that reduce to an
/// empty filename are skipped.
pub fn render_album_page(page: &AlbumPage, all_keys: &[String]) -> String {
    let mut html = String::from("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str(GALLERIA_HEAD);
    html.push_str("\n</head>\n<body>\n<div class=\"galleria\">\n");

    for key in all_keys {
        if let Some(name) = page.album.photo_name(key) {
            html.push_str(&format!("<img src=\"{key}\" data-title=\"{name}\">\n"));
        }
    }

    html.push_str(concat!(
        "</div>\n",
        r#"<p>Go back to <a href="index.html">main page</a> of photo archive</p>"#,
        "\n",
        r#"<script>(function() {Galleria.run(".galleria");}());</script>"#,
        "\n</body>\n</html>\n",
    ));
    html
}

/// The fixed error page served for unknown paths.
pub fn render_error_page() -> String {
    concat!(
        "<!DOCTYPE html>\n<html>\n<head><title>Photo archive</title></head>\n<body>\n<h1>Error</h1>\n",
        r#"<p>Error accessing photo archive. Return to <a href="index.html">home page</a> of photo archive.</p>"#,
        "\n</body>\n</html>\n",
    )
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn albums(names: &[&str]) -> Vec<Album> {
        names.iter().map(|n| Album::new(*n).unwrap()).collect()
    }

    #[test]
    fn pages_are_numbered_by_position() {
        let pages = plan_pages(albums(&["winter", "summer", "spring"]));

        let files: Vec<&str> = pages.iter().map(|p| p.file_name.as_str()).collect();
        assert_eq!(files, vec!["album0.html", "album1.html", "album2.html"]);
    }

    #[test]
    fn index_links_follow_plan_order() {
        let pages = plan_pages(albums(&["a-album", "b-album", "c-album"]));
        let html = render_index(&pages);

        assert!(html.contains("<li><a href=\"album0.html\">a-album</a></li>"));
        assert!(html.contains("<li><a href=\"album1.html\">b-album</a></li>"));
        assert!(html.contains("<li><a href=\"album2.html\">c-album</a></li>"));

        let a = html.find("a-album").unwrap();
        let b = html.find("b-album").unwrap();
        let c = html.find("c-album").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn album_page_embeds_only_its_own_photos() {
        let pages = plan_pages(albums(&["a"]));
        let keys = vec![
            "a/one.jpg".to_string(),
            "a/two.jpg".to_string(),
            "album2/other.jpg".to_string(),
        ];
        let html = render_album_page(&pages[0], &keys);

        assert!(html.contains("<img src=\"a/one.jpg\" data-title=\"one.jpg\">"));
        assert!(html.contains("<img src=\"a/two.jpg\" data-title=\"two.jpg\">"));
        assert!(!html.contains("album2/other.jpg"));
    }

    #[test]
    fn album_page_skips_placeholder_keys() {
        let pages = plan_pages(albums(&["a"]));
        let keys = vec!["a/".to_string(), "a/one.jpg".to_string()];
        let html = render_album_page(&pages[0], &keys);

        assert!(!html.contains("src=\"a/\""));
        assert!(html.contains("src=\"a/one.jpg\""));
    }

    #[test]
    fn error_page_links_back_to_index() {
        let html = render_error_page();
        assert!(html.contains("<a href=\"index.html\">"));
    }
}
