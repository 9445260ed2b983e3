use arxiv_bot::utils::links::extract_arxiv_id;

#[test]
fn test_valid_url_variants() {
    let urls = [
        "https://arxiv.org/abs/2404.07979",
        "https://arxiv.org/abs/2404.07979v1",
        "https://arxiv.org/abs/2404.07979v12",
        "https://www.arxiv.org/abs/2404.07979",
        "http://arxiv.org/abs/2404.07979",
        "http://www.arxiv.org/abs/2404.07979v3",
        "<@U123456789> https://arxiv.org/abs/2404.07979",
        "Check this paper: https://arxiv.org/abs/2404.07979 it's great!",
        "<https://arxiv.org/abs/2404.07979>",
    ];

    for url in urls {
        assert_eq!(
            extract_arxiv_id(url),
            Some("2404.07979".to_string()),
            "failed for {url}"
        );
    }
}

#[test]
fn test_four_digit_sequence_number() {
    assert_eq!(
        extract_arxiv_id("https://arxiv.org/abs/1706.0376"),
        Some("1706.0376".to_string())
    );
}

#[test]
fn test_invalid_urls() {
    let texts = [
        "https://google.com/abs/2404.07979",
        "https://arxiv.org/abs/invalid",
        "https://arxiv.org/abs/240.07979",
        "arxiv.org/abs/2404.07979",
        "just some text",
        "",
    ];

    for text in texts {
        assert_eq!(extract_arxiv_id(text), None, "matched {text}");
    }
}

#[test]
fn test_first_link_wins() {
    let text = "First: https://arxiv.org/abs/2404.07979 Second: https://arxiv.org/abs/1706.03762";
    assert_eq!(extract_arxiv_id(text), Some("2404.07979".to_string()));
}

#[test]
fn test_link_buried_in_long_text() {
    let text = format!(
        "{} https://arxiv.org/abs/2404.07979 {}",
        "Lorem ipsum ".repeat(1000),
        "dolor sit amet ".repeat(1000)
    );
    assert_eq!(extract_arxiv_id(&text), Some("2404.07979".to_string()));
}
