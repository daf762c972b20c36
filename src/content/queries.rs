//! GraphQL documents sent to the content API.
//!
//! Selection sets follow the content schema exactly; renaming a field here
//! breaks compatibility with the hosted API.

pub const GET_POSTS: &str = r"
query GetPosts {
  postsConnection(orderBy: createdAt_DESC) {
    edges {
      cursor
      node {
        author {
          bio
          name
          id
          photo {
            url
          }
        }
        createdAt
        slug
        title
        excerpt
        featuredImage {
          url
        }
        categories {
          name
          slug
        }
      }
    }
  }
}
";

pub const GET_RECENT_POSTS: &str = r"
query GetRecentPosts {
  posts(orderBy: createdAt_DESC, first: 3) {
    title
    excerpt
    featuredImage {
      url
    }
    author {
      name
      photo {
        url
      }
    }
    createdAt
    slug
  }
}
";

pub const GET_CATEGORIES: &str = r"
query GetCategories {
  categories {
    name
    slug
  }
}
";

pub const GET_POST_DETAILS: &str = r"
query GetPostDetails($slug: String!) {
  post(where: { slug: $slug }) {
    title
    excerpt
    featuredImage {
      url
    }
    author {
      name
      bio
      photo {
        url
      }
    }
    createdAt
    slug
    content {
      raw
    }
    categories {
      name
      slug
    }
  }
}
";

pub const GET_SIMILAR_POSTS: &str = r"
query GetSimilarPosts($slug: String!, $categories: [String!]) {
  posts(
    where: { slug_not: $slug, AND: { categories_some: { slug_in: $categories } } }
    last: 3
  ) {
    title
    featuredImage {
      url
    }
    createdAt
    slug
  }
}
";

pub const GET_ADJACENT_POSTS: &str = r"
query GetAdjacentPosts($createdAt: DateTime!, $slug: String!) {
  next: posts(
    first: 1
    orderBy: createdAt_ASC
    where: { slug_not: $slug, AND: { createdAt_gte: $createdAt } }
  ) {
    title
    featuredImage {
      url
    }
    createdAt
    slug
  }
  previous: posts(
    first: 1
    orderBy: createdAt_DESC
    where: { slug_not: $slug, AND: { createdAt_lte: $createdAt } }
  ) {
    title
    featuredImage {
      url
    }
    createdAt
    slug
  }
}
";

pub const GET_CATEGORY_POSTS: &str = r"
query GetCategoryPost($slug: String!) {
  postsConnection(where: { categories_some: { slug: $slug } }) {
    edges {
      cursor
      node {
        author {
          bio
          name
          id
          photo {
            url
          }
        }
        createdAt
        slug
        title
        excerpt
        featuredImage {
          url
        }
        categories {
          name
          slug
        }
      }
    }
  }
}
";

pub const GET_FEATURED_POSTS: &str = r"
query GetFeaturedPosts {
  posts(where: { featuredPost: true }) {
    author {
      name
      photo {
        url
      }
    }
    featuredImage {
      url
    }
    title
    slug
    createdAt
  }
}
";

pub const GET_COMMENTS: &str = r"
query GetComments($slug: String!) {
  comments(where: { post: { slug: $slug } }) {
    name
    createdAt
    comment
  }
}
";

pub const CREATE_COMMENT: &str = r"
mutation CreateComment($name: String!, $email: String, $comment: String!, $slug: String!) {
  createComment(
    data: { name: $name, email: $email, comment: $comment, post: { connect: { slug: $slug } } }
  ) {
    id
  }
}
";
