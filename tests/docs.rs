use pg_workload::routes::doc::ApiDoc;
use utoipa::OpenApi;

#[test]
fn docs_describe_every_method_each_route_accepts() {
    let doc = ApiDoc::openapi();

    for path in ["/seed", "/write"] {
        let item = doc.paths.paths.get(path).expect(path);
        assert!(item.get.is_some(), "{path} GET");
        assert!(item.post.is_some(), "{path} POST");
    }
    for path in ["/", "/firstrun", "/read", "/dynamic", "/health"] {
        let item = doc.paths.paths.get(path).expect(path);
        assert!(item.get.is_some(), "{path} GET");
        assert!(item.post.is_none(), "{path} POST");
    }
}
