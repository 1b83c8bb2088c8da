//! Schemas and queries shared by the tests of several modules.

use crate::schema::Schema;
use crate::schema::SchemaBuilder;

/// A GitHub-flavored schema: `viewer` plus three nested Relay connections.
pub(crate) const REPOSITORY_SCHEMA_SDL: &str = r#"
    interface Node {
      id: ID!
    }

    type Query {
      node(id: ID!): Node
      search(query: String!, first: Int, last: Int): SearchResultItemConnection!
      viewer: User!
    }

    type Mutation {
      addStar(starrableId: ID!): Repository
    }

    type User implements Node {
      id: ID!
      login: String!
      repositories(first: Int, last: Int, after: String): RepositoryConnection!
    }

    type RepositoryConnection {
      edges: [RepositoryEdge]
      nodes: [Repository]
      pageInfo: PageInfo!
      totalCount: Int!
    }

    type RepositoryEdge {
      cursor: String!
      node: Repository
    }

    type Repository implements Node {
      id: ID!
      issues(first: Int, last: Int): IssueConnection!
      name: String!
      owner: User!
    }

    type IssueConnection {
      edges: [IssueEdge]
      totalCount: Int!
    }

    type IssueEdge {
      cursor: String!
      node: Issue
    }

    type Issue implements Node {
      id: ID!
      labels(first: Int, last: Int): LabelConnection
      state: IssueState!
      title: String!
    }

    enum IssueState {
      CLOSED
      OPEN
    }

    type LabelConnection {
      edges: [LabelEdge]
      totalCount: Int!
    }

    type LabelEdge {
      cursor: String!
      node: Label
    }

    type Label implements Node {
      id: ID!
      name: String!
    }

    type PageInfo {
      endCursor: String
      hasNextPage: Boolean!
    }

    union SearchResultItem = Issue | Repository | User

    type SearchResultItemConnection {
      edges: [SearchResultItemEdge]
      issueCount: Int!
    }

    type SearchResultItemEdge {
      node: SearchResultItem
    }
"#;

/// Items that can be liked by users, with a connection at each level.
pub(crate) const ITEM_SCHEMA_SDL: &str = r#"
    type Query {
      hello: String
      item: Item
      items(first: Int, last: Int): ItemConnection
    }

    type Mutation {
      updateItem(id: ID!): Item
    }

    type Item {
      id: ID!
      likedUsers(first: Int, last: Int): UserConnection
    }

    type ItemConnection {
      edges: [ItemEdge]
      pageInfo: PageInfo!
      totalCount: Int!
    }

    type ItemEdge {
      cursor: String!
      node: Item
    }

    type PageInfo {
      endCursor: String
      hasNextPage: Boolean!
      hasPreviousPage: Boolean!
      startCursor: String
    }

    type User {
      id: ID!
      name: String!
    }

    type UserConnection {
      edges: [UserEdge!]!
      pageInfo: PageInfo!
      totalCount: Int!
    }

    type UserEdge {
      cursor: String!
      node: User!
    }
"#;

/// `viewer` followed by `repositories(first: 100)`, `issues(first: 50)` and
/// `labels(first: 60)`, each selected through `edges { node }`.
pub(crate) const NESTED_CONNECTIONS_QUERY: &str = r#"
    query {
      viewer {
        login
        repositories(first: 100) {
          edges {
            node {
              id
              issues(first: 50) {
                edges {
                  node {
                    id
                    labels(first: 60) {
                      edges {
                        node {
                          id
                          name
                        }
                      }
                    }
                  }
                }
              }
            }
          }
        }
      }
    }
"#;

/// `item` plus `items(first: 10)` whose items each select
/// `likedUsers(first: 10)`.
pub(crate) const LIKED_ITEMS_QUERY: &str = r#"
    query {
      item {
        id
      }
      items(first: 10) {
        totalCount
        edges {
          node {
            id
            likedUsers(first: 10) {
              totalCount
              edges {
                cursor
                node {
                  id
                }
              }
            }
          }
        }
      }
    }
"#;

pub(crate) fn repository_schema() -> Schema {
    build_schema(REPOSITORY_SCHEMA_SDL)
}

pub(crate) fn item_schema() -> Schema {
    build_schema(ITEM_SCHEMA_SDL)
}

pub(crate) fn build_schema(sdl: &str) -> Schema {
    SchemaBuilder::from_str(None, sdl)
        .expect("schema fixture failed to load")
        .build()
        .expect("schema fixture failed to build")
}
