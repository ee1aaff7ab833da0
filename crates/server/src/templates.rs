//! Embedded HTML for the landing page.

/// Landing page served at `/`.
pub const INDEX: &str = r#"<!doctype html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Post Relay</title>
    <link rel="stylesheet" href="/styles.css">
</head>
<body>
    <main class="container">
        <header>
            <h1>Post Relay</h1>
            <p class="tagline">A thin relay in front of the remote posts API.</p>
        </header>
        <section>
            <h2>Routes</h2>
            <table>
                <tbody>
                    <tr><td><code>GET /posts</code></td><td>list all posts</td></tr>
                    <tr><td><code>GET /posts/:id</code></td><td>fetch one post</td></tr>
                    <tr><td><code>POST /submit</code></td><td>create a post (<code>{"title", "body"}</code>)</td></tr>
                    <tr><td><code>PUT /posts/:id/update</code></td><td>replace a post</td></tr>
                    <tr><td><code>PATCH /posts/:id/edit</code></td><td>partially update a post</td></tr>
                    <tr><td><code>DELETE /posts/:id</code></td><td>delete a post</td></tr>
                </tbody>
            </table>
        </section>
    </main>
</body>
</html>
"#;
