//! Hand-authored site constants. Everything external the page links to
//! lives here so copy edits never touch component code.

pub const BRAND_FIRST: &str = "CHRISTIAN";
pub const BRAND_LAST: &str = "OH";

pub const JOURNEY_VIDEO_ID: &str = "I2ykHYy_fhU";
pub const TESTIMONIAL_VIDEO_ID: &str = "sMFja0TBvBI";

pub const YOUTUBE_CHANNEL_URL: &str = "https://www.youtube.com/c/JNARealEstate";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/";
pub const LINKTREE_URL: &str = "https://linktr.ee/christianoh";

pub const CONTACT_EMAIL: &str = "hello@christianoh.sg";
pub const CONTACT_WHATSAPP: &str = "+65 9123 4567";

pub fn youtube_embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{}?autoplay=1", video_id)
}

pub fn youtube_thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", video_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_url_carries_video_id() {
        let url = youtube_embed_url(JOURNEY_VIDEO_ID);
        assert!(url.contains(JOURNEY_VIDEO_ID));
        assert!(url.ends_with("?autoplay=1"));
    }
}
