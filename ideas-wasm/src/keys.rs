use ideas_client::PostSummary;

/// Ключ карточки для `<For>`: позиция в списке плюс содержимое, чтобы
/// одинаковые записи не схлопывались, а новая страница перерисовывалась.
pub(crate) type CardKey = (usize, String, String, String);

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn card_key(index: usize, post: &PostSummary) -> CardKey {
    (
        index,
        post.title.clone(),
        post.image_url.clone(),
        post.display_date.clone(),
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use ideas_client::mapping::PLACEHOLDER_IMAGE_URL;

    use super::*;

    fn post(title: &str, image_url: &str) -> PostSummary {
        PostSummary {
            title: title.to_string(),
            image_url: image_url.to_string(),
            display_date: "5 SEPTEMBER 2023".to_string(),
        }
    }

    #[test]
    fn identical_cards_get_distinct_keys() {
        let posts = [
            post("Same title", PLACEHOLDER_IMAGE_URL),
            post("Same title", PLACEHOLDER_IMAGE_URL),
        ];

        let keys: HashSet<_> = posts
            .iter()
            .enumerate()
            .map(|(index, post)| card_key(index, post))
            .collect();

        assert_eq!(keys.len(), 2);
    }

    #[test]
    fn changed_content_at_same_position_changes_key() {
        let before = card_key(0, &post("First", PLACEHOLDER_IMAGE_URL));
        let after = card_key(0, &post("Second", PLACEHOLDER_IMAGE_URL));

        assert_ne!(before, after);
    }
}
