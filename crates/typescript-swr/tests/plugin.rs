#![allow(unused_crate_dependencies)]

use cynic_parser::{ExecutableDocument, TypeSystemDocument};
use expect_test::expect_file;
use graphql_typescript_swr::{external_fragments, plugin, DocumentFile, Patterns, PluginOutput, RawSwrPluginConfig};
use indoc::indoc;
use rstest::rstest;

const SCHEMA: &str = indoc! {r#"
    type Query {
      feed(type: FeedType, offset: Int, limit: Int): [Entry]
      entry(repoFullName: String!): Entry
    }

    type Mutation {
      submitComment(repoFullName: String!, commentContent: String!): Comment
    }

    type Subscription {
      commentAdded(repoFullName: String!): Comment
    }

    enum FeedType {
      HOT
      NEW
      TOP
    }

    type Entry {
      id: Int!
      repository: Repository!
      commentCount: Int!
      comments(limit: Int, offset: Int): [Comment]!
    }

    type Repository {
      name: String!
      full_name: String!
      owner: User
    }

    type User {
      login: String!
      avatar_url: String!
    }

    type Comment {
      id: Int!
      postedBy: User!
      content: String!
    }
"#};

const BASIC_DOC: &str = indoc! {r#"
    query feed {
      feed {
        id
        commentCount
        repository {
          owner {
            avatar_url
          }
        }
      }
    }
    query feed2($v: String!) {
      feed {
        id
      }
    }
    query feed3($v: String) {
      feed {
        id
      }
    }
    query feed4($v: String! = "TEST") {
      feed {
        id
      }
    }
"#};

fn schema() -> TypeSystemDocument {
    cynic_parser::parse_type_system_document(SCHEMA).unwrap()
}

fn documents(sources: &[&str]) -> Vec<DocumentFile> {
    sources
        .iter()
        .enumerate()
        .map(|(i, source)| {
            DocumentFile::new(
                format!("document{i}.graphql"),
                cynic_parser::parse_executable_document(source).unwrap(),
            )
        })
        .collect()
}

fn generate(sources: &[&str], config: &RawSwrPluginConfig) -> PluginOutput {
    plugin(&schema(), &documents(sources), config, &[])
}

fn infinite(patterns: &[&str]) -> Option<Patterns> {
    Some(Patterns::from(patterns.to_vec()))
}

#[test]
fn straight() {
    let output = generate(&[BASIC_DOC], &RawSwrPluginConfig::default());

    expect_file!["outputs/straight.ts"].assert_eq(&output.content);
}

#[test]
fn exclude_queries() {
    let config = RawSwrPluginConfig {
        exclude_queries: Some(Patterns::from(vec!["feed[2-3]", "hoge", "foo"])),
        ..Default::default()
    };

    let output = generate(&[BASIC_DOC], &config);

    expect_file!["outputs/exclude_queries.ts"].assert_eq(&output.content);
}

#[test]
fn use_swr_infinite() {
    let config = RawSwrPluginConfig {
        use_swr_infinite: infinite(&["feed[24]"]),
        ..Default::default()
    };

    let output = generate(&[BASIC_DOC], &config);

    expect_file!["outputs/infinite.ts"].assert_eq(&output.content);
}

#[test]
fn autogen_swr_key() {
    let config = RawSwrPluginConfig {
        autogen_swr_key: Some(true),
        use_swr_infinite: infinite(&["feed[24]"]),
        ..Default::default()
    };

    let output = generate(&[BASIC_DOC], &config);

    expect_file!["outputs/autogen_swr_key.ts"].assert_eq(&output.content);
}

#[test]
fn raw_request() {
    let config = RawSwrPluginConfig {
        raw_request: Some(true),
        ..Default::default()
    };

    let output = generate(&[BASIC_DOC], &config);

    expect_file!["outputs/raw_request.ts"].assert_eq(&output.content);
    assert!(output
        .prepend
        .contains(&"import { ClientError } from 'graphql-request/dist/types';".to_owned()));
}

#[test]
fn types_prefix_and_suffix() {
    let config = RawSwrPluginConfig {
        types_prefix: Some("P".to_owned()),
        types_suffix: Some("S".to_owned()),
        use_swr_infinite: infinite(&["feed"]),
        ..Default::default()
    };

    let output = generate(&[BASIC_DOC], &config);

    expect_file!["outputs/types_affixes.ts"].assert_eq(&output.content);
    assert_eq!(output.content.matches("SWRInfiniteKeyLoader").count(), 3);
    assert_eq!(output.content.matches("PSWRInfiniteKeyLoaderS").count(), 3);
}

#[test]
fn mutations_and_fragments_do_not_change_hooks() {
    let extra = indoc! {r#"
        mutation submitComment($repoFullName: String!, $commentContent: String!) {
          submitComment(repoFullName: $repoFullName, commentContent: $commentContent) {
            ...CommentsPageComment
          }
        }
        subscription onCommentAdded($repoFullName: String!) {
          commentAdded(repoFullName: $repoFullName) {
            id
          }
        }
        fragment CommentsPageComment on Comment {
          id
          postedBy {
            login
          }
          content
        }
    "#};

    let output = generate(&[BASIC_DOC, extra], &RawSwrPluginConfig::default());

    expect_file!["outputs/straight.ts"].assert_eq(&output.content);
}

#[test]
fn external_fragments_are_accepted() {
    let external: ExecutableDocument =
        cynic_parser::parse_executable_document("fragment RepoInfo on Repository { full_name }").unwrap();
    let documents = documents(&[BASIC_DOC]);

    let output = plugin(
        &schema(),
        &documents,
        &RawSwrPluginConfig::default(),
        &external_fragments(&external),
    );

    expect_file!["outputs/straight.ts"].assert_eq(&output.content);
}

#[rstest]
#[case::plain(false, false, 2)]
#[case::infinite(false, true, 3)]
#[case::type_imports(true, false, 3)]
#[case::type_imports_infinite(true, true, 5)]
fn import_combinations(#[case] use_type_imports: bool, #[case] with_infinite: bool, #[case] count: usize) {
    let config = RawSwrPluginConfig {
        use_type_imports: Some(use_type_imports),
        use_swr_infinite: with_infinite.then(|| Patterns::from("feed")),
        ..Default::default()
    };

    let output = generate(&[BASIC_DOC], &config);

    assert_eq!(output.prepend.len(), count);

    let client_error = output.prepend.last().unwrap();
    insta::allow_duplicates! {
        if use_type_imports {
            insta::assert_snapshot!(client_error, @"import type { ClientError } from 'graphql-request/dist/types';");
        } else {
            insta::assert_snapshot!(client_error, @"import { ClientError } from 'graphql-request/dist/types';");
        }
    }
}

#[test]
fn generated_keys_replace_key_parameters() {
    let with_key = generate(&[BASIC_DOC], &RawSwrPluginConfig::default());
    assert_eq!(with_key.content.matches("key: SWRKeyInterface, ").count(), 4);
    assert!(!with_key.content.contains("const genKey"));

    let config = RawSwrPluginConfig {
        autogen_swr_key: Some(true),
        ..Default::default()
    };

    let generated = generate(&[BASIC_DOC], &config);
    assert!(!generated.content.contains("key: SWRKeyInterface, "));
    assert_eq!(generated.content.matches("const genKey").count(), 1);
}

#[test]
fn output_is_deterministic() {
    let config = RawSwrPluginConfig {
        autogen_swr_key: Some(true),
        raw_request: Some(true),
        use_swr_infinite: infinite(&["feed*"]),
        ..Default::default()
    };

    let first = generate(&[BASIC_DOC], &config);
    let second = generate(&[BASIC_DOC], &config);

    assert_eq!(first, second);
}

#[test]
fn merged_file_starts_with_imports() {
    let output = generate(&[BASIC_DOC], &RawSwrPluginConfig::default()).to_string();

    assert!(output.starts_with(
        "import useSWR, { SWRConfiguration as SWRConfigInterface, Key as SWRKeyInterface } from 'swr';\nimport { ClientError } from 'graphql-request/dist/types';\nexport function getSdkWithHooks("
    ));
    assert!(output.ends_with("export type SdkWithHooks = ReturnType<typeof getSdkWithHooks>;\n"));
}

#[test]
fn negated_exclude_pattern() {
    let config = RawSwrPluginConfig {
        exclude_queries: Some(Patterns::from("!feed")),
        ..Default::default()
    };

    let output = generate(&[BASIC_DOC], &config);

    assert!(output.content.contains("    useFeed(key: SWRKeyInterface, "));
    assert!(!output.content.contains("useFeed2("));
    assert!(!output.content.contains("useFeed3("));
    assert!(!output.content.contains("useFeed4("));
}

#[test]
fn underscored_operation_names() {
    let config = RawSwrPluginConfig {
        autogen_swr_key: Some(true),
        ..Default::default()
    };

    let output = generate(
        &[indoc! {r#"
            query get_user { feed { id } }
            query feed_2($v: String!) { feed { id } }
        "#}],
        &config,
    );

    insta::assert_snapshot!(
        output.content.lines().find(|line| line.contains("useGetUser(")).unwrap().trim(),
        @"useGetUser(variables?: Get_UserQueryVariables, config?: SWRConfigInterface<Get_UserQuery, ClientError>, opt?: {customKey?: (generatedName:SWRKeyInterface) => SWRKeyInterface}) {"
    );
    assert!(output.content.contains(
        "useSWR<Feed_2Query, ClientError>(opt?.customKey ? opt.customKey(genKey<Feed_2QueryVariables>('Feed_2', variables)) : genKey<Feed_2QueryVariables>('Feed_2', variables), () => sdk.feed_2(variables), config);"
    ));
}
