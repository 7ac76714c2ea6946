// flowgen — Web UI HTML template
//
// Inline HTML/HTMX template served as a Rust string constant.
// No external files or build steps required.

/// The single generator page. The form posts to /generate and swaps the
/// returned fragment into the result region; the indicator stays visible
/// for the full round-trip.
pub const PAGE_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>n8n Agentic Workflow Generator</title>
  <script src="https://unpkg.com/htmx.org@2.0.4"></script>
  <style>
    :root {
      --bg: #0f1117;
      --surface: #1a1d27;
      --accent: #6c63ff;
      --accent2: #00d4aa;
      --text: #e0e0e0;
      --text-muted: #888;
      --border: #2a2d3a;
      --warning: #ffa502;
      --danger: #ff4757;
    }

    * { margin: 0; padding: 0; box-sizing: border-box; }

    body {
      font-family: 'Segoe UI', system-ui, -apple-system, sans-serif;
      background: var(--bg);
      color: var(--text);
      min-height: 100vh;
    }

    header {
      background: var(--surface);
      border-bottom: 1px solid var(--border);
      padding: 1.5rem 2rem;
    }

    header h1 {
      font-size: 1.5rem;
      font-weight: 600;
      background: linear-gradient(135deg, var(--accent), var(--accent2));
      -webkit-background-clip: text;
      -webkit-text-fill-color: transparent;
      background-clip: text;
    }

    header p {
      margin-top: 0.5rem;
      color: var(--text-muted);
      font-size: 0.9rem;
    }

    main {
      max-width: 860px;
      margin: 2rem auto;
      padding: 0 2rem;
    }

    textarea {
      width: 100%;
      min-height: 200px;
      background: var(--surface);
      border: 1px solid var(--border);
      border-radius: 12px;
      color: var(--text);
      padding: 1rem;
      font-size: 0.95rem;
      resize: vertical;
    }

    textarea:focus { outline: none; border-color: var(--accent); }

    button {
      margin-top: 1rem;
      background: var(--accent);
      border: none;
      border-radius: 8px;
      color: #fff;
      padding: 0.75rem 1.5rem;
      font-size: 0.95rem;
      cursor: pointer;
    }

    button:hover { filter: brightness(1.1); }

    .htmx-indicator { display: none; margin-top: 1rem; color: var(--text-muted); }
    .htmx-request .htmx-indicator, .htmx-request.htmx-indicator { display: block; }

    .banner {
      margin-top: 1.5rem;
      border-radius: 8px;
      padding: 0.75rem 1rem;
      font-size: 0.9rem;
    }

    .banner.success { border: 1px solid var(--accent2); color: var(--accent2); }
    .banner.warning { border: 1px solid var(--warning); color: var(--warning); }
    .banner.error   { border: 1px solid var(--danger); color: var(--danger); }

    pre.artifact {
      margin-top: 1rem;
      background: var(--surface);
      border: 1px solid var(--border);
      border-radius: 12px;
      padding: 1rem;
      overflow-x: auto;
      font-size: 0.85rem;
      white-space: pre-wrap;
      word-break: break-word;
    }

    footer {
      text-align: center;
      padding: 2rem;
      color: var(--text-muted);
      font-size: 0.75rem;
    }
  </style>
</head>
<body>
  <header>
    <h1>🤖 n8n Agentic Workflow Generator</h1>
    <p>Describe the AI-based workflow you want, and this tool will generate an n8n JSON template.
       Example: "Build a workflow that accepts uploaded PDFs, extracts key answers using GPT, and stores results in Notion."</p>
  </header>

  <main>
    <form hx-post="/generate" hx-target="#result" hx-swap="innerHTML" hx-indicator="#spinner">
      <textarea name="description" placeholder="📝 Describe your agentic workflow"></textarea>
      <button type="submit">⚙️ Generate n8n Workflow</button>
    </form>

    <div id="spinner" class="htmx-indicator">Generating…</div>

    <div id="result"></div>
  </main>

  <footer>
    flowgen — n8n workflow generator
  </footer>
</body>
</html>"##;
