use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "url")] {
        use path_codec::{
            end_of_segments, no_params, optional_param, param,
            remaining_segments, repeated_param, root, segment, static_segment,
            url::UrlParts, MatchOutcome, PathSegment, SegmentError, Token,
        };

        #[test]
        fn raw_url_path_is_matched_and_query_ignored() {
            let def: PathSegment<_, SegmentError> =
                root() / static_segment("users") / segment::<u32, _>();
            assert_eq!(
                def.match_raw_url("https://example.com/users/42?tab=posts#top"),
                Ok(MatchOutcome::complete(42))
            );
            assert_eq!(
                def.match_raw_url("/users/42"),
                Ok(MatchOutcome::complete(42))
            );
        }

        #[test]
        fn raw_url_segments_are_percent_decoded() {
            let def: PathSegment<_, SegmentError> =
                static_segment("files") / segment::<String, _>();
            assert_eq!(
                def.match_raw_url("/files/hello%20world%2Fx").map(|m| m.value),
                Ok("hello world/x".to_string())
            );
        }

        #[test]
        fn unparseable_url_is_malformed() {
            let def = root::<SegmentError>();
            assert_eq!(
                def.match_raw_url("http://[::1"),
                Err(SegmentError::Malformed("http://[::1".into()))
            );
        }

        #[test]
        fn url_matcher_round_trips() {
            let def = (static_segment::<SegmentError>("search")
                / remaining_segments())
            .with_params(
                param::<u32, _>("page")
                    & optional_param::<String, _>("q")
                    & repeated_param::<i64, _>("id"),
            );

            let value = (
                vec!["a b".to_string(), "c/d".to_string()],
                3,
                Some("rust & more".to_string()),
                vec![1, -2],
            );
            let url = def.create_url(value.clone());
            assert_eq!(
                url,
                "search/a%20b/c%2Fd?page=3&q=rust%20%26%20more&id=1&id=%2D2"
            );
            assert_eq!(
                def.match_raw_url(&url).map(|m| m.value),
                Ok(value)
            );
        }

        #[test]
        fn missing_required_parameter() {
            let def = (root::<SegmentError>() / static_segment("list"))
                .with_params(param::<u32, _>("page"));
            assert_eq!(
                def.match_raw_url("/list?size=1").map(|m| m.value),
                Err(SegmentError::MissingParameter("page".into()))
            );
            assert_eq!(
                def.match_raw_url("/list?page=9").map(|m| m.value),
                Ok(9)
            );
        }

        #[test]
        fn path_errors_win_over_parameter_errors() {
            let def = static_segment::<SegmentError>("list")
                .with_params(param::<u32, _>("page"));
            assert_eq!(
                def.match_raw_url("/other").map(|m| m.value),
                Err(SegmentError::WrongValue {
                    expected: "list".into(),
                    actual: "other".into()
                })
            );
        }

        #[test]
        fn no_params_leaves_the_url_bare() {
            let def = (static_segment::<SegmentError>("home")
                / end_of_segments())
            .with_params(no_params());
            assert_eq!(def.create_url(()), "home");
            assert_eq!(
                def.match_raw_url("/home?anything=1").map(|m| m.value),
                Ok(())
            );
        }

        #[test]
        fn url_parts_drop_empty_components() {
            let parts = UrlParts::parse("//x.org//a///b/?k=1&k=2")
                .expect("couldn't parse url");
            assert_eq!(parts.segments, vec![Token::new("a"), Token::new("b")]);
            assert_eq!(
                parts.params.get_all("k"),
                Some(&["1".to_string(), "2".to_string()][..])
            );
        }
    }
}
