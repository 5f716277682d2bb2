use crate::controls::ControlTable;
use crate::document::{Document, escape_html};
use crate::scoreboard::DEFAULT_COUNTERS;

pub fn render_scoreboard(page: &Document, controls: &ControlTable) -> String {
    let mut template = SCOREBOARD_HTML.to_string();
    for counter in DEFAULT_COUNTERS {
        template = template.replace(
            &format!("[[controls:{counter}]]"),
            &control_buttons(controls, counter),
        );
    }
    fill_template(&template, page)
}

pub fn render_weather(page: &Document) -> String {
    fill_template(WEATHER_HTML, page)
}

fn control_buttons(controls: &ControlTable, counter: &str) -> String {
    controls
        .for_target(counter)
        .map(|control| {
            format!(
                "<form method=\"post\" action=\"/scoreboard/control/{id}\">\
                 <button type=\"submit\" data-control=\"{id}\" data-action=\"{action}\" data-target=\"{target}\">{label}</button>\
                 </form>",
                id = escape_html(&control.id),
                action = control.command.action.as_str(),
                target = escape_html(&control.command.target),
                label = escape_html(control.label),
            )
        })
        .collect()
}

// {{id}}, {{id.attr}}, {{id:children}} and {{body_class}}. Missing ids render empty.
pub fn fill_template(template: &str, page: &Document) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        out.push_str(&resolve(after[..end].trim(), page));
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

fn resolve(key: &str, page: &Document) -> String {
    if key == "body_class" {
        return escape_html(&page.body_class());
    }
    if let Some(id) = key.strip_suffix(":children") {
        return page.children(id).concat();
    }
    if let Some((id, attr)) = key.split_once('.') {
        return page.attr(id, attr).map(escape_html).unwrap_or_default();
    }
    page.text(key).map(escape_html).unwrap_or_default()
}

const SCOREBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Placar</title>
  <style>
    :root {
      --bg: #11151c;
      --card: #1b2230;
      --ink: #e8ecf2;
      --muted: #8a94a6;
      --accent: #f5a623;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px;
    }

    .app {
      width: min(860px, 100%);
      display: grid;
      gap: 24px;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: var(--card);
      border-radius: 18px;
      padding: 18px;
      display: grid;
      gap: 10px;
    }

    .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .value {
      font-size: 2rem;
      font-weight: 600;
      color: var(--accent);
    }

    .controls {
      display: flex;
      gap: 8px;
    }

    .controls form {
      margin: 0;
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-weight: 600;
      cursor: pointer;
    }

    a {
      color: var(--accent);
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Placar</h1>
      <a href="/weather">Clima</a>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Kills</span>
        <span id="kills" class="value">{{kills}}</span>
        <div class="controls">[[controls:kills]]</div>
      </div>
      <div class="stat">
        <span class="label">Deaths</span>
        <span id="deaths" class="value">{{deaths}}</span>
        <div class="controls">[[controls:deaths]]</div>
      </div>
      <div class="stat">
        <span class="label">Time A</span>
        <span id="scoreA" class="value">{{scoreA}}</span>
        <div class="controls">[[controls:scoreA]]</div>
      </div>
      <div class="stat">
        <span class="label">Time B</span>
        <span id="scoreB" class="value">{{scoreB}}</span>
        <div class="controls">[[controls:scoreB]]</div>
      </div>
    </section>

    <section class="panel">
      <div class="stat">
        <span class="label">Jogadores</span>
        <span id="players" class="value">{{players}}</span>
      </div>
      <div class="stat">
        <span class="label">Servidor</span>
        <span id="server-uptime">{{server-uptime}}</span>
        <button id="simulate" type="button">Simular</button>
      </div>
    </section>
  </main>

  <script>
    const render = (state) => {
      Object.keys(state).forEach((key) => {
        const el = document.getElementById(key);
        if (el) el.textContent = state[key];
      });
    };

    document.addEventListener('click', (event) => {
      const btn = event.target.closest('button[data-action]');
      if (!btn) return;
      event.preventDefault();
      fetch('/api/scoreboard/command', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ action: btn.dataset.action, target: btn.dataset.target })
      })
        .then((res) => (res.ok ? res.json() : Promise.reject(new Error(res.statusText))))
        .then(render)
        .catch((err) => console.error(err));
    });

    document.getElementById('simulate')?.addEventListener('click', () => {
      fetch('/api/simulate', { method: 'POST' })
        .then((res) => res.json())
        .then((snapshot) => {
          document.getElementById('players').textContent = snapshot.players;
          document.getElementById('server-uptime').textContent = snapshot.uptime;
        })
        .catch((err) => console.error(err));
    });
  </script>
</body>
</html>
"#;

const WEATHER_HTML: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Clima</title>
  <style>
    body {
      margin: 0;
      min-height: 100vh;
      background: #0f1720;
      color: #e6edf5;
      font-family: "Trebuchet MS", sans-serif;
      padding: 32px 18px;
    }

    body.light {
      background: #f4f7fb;
      color: #1c2733;
    }

    .current {
      display: flex;
      gap: 24px;
      align-items: center;
    }

    .current img {
      width: 96px;
      height: 96px;
    }

    #temp {
      font-size: 3rem;
      font-weight: 600;
    }

    #cards {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(130px, 1fr));
      gap: 12px;
      margin-top: 24px;
    }

    .day {
      border-radius: 14px;
      padding: 12px;
      background: rgba(127, 127, 127, 0.15);
    }

    .day img {
      width: 40px;
      height: 40px;
    }

    .status {
      color: #8a94a6;
      font-size: 0.9rem;
    }
  </style>
</head>
<body class="{{body_class}}">
  <header>
    <h1>Clima</h1>
    <form method="post" action="/theme/toggle">
      <button id="theme-toggle" type="submit">Alternar tema</button>
    </form>
  </header>

  <section class="current">
    <img id="icon" src="{{icon.src}}" alt="{{icon.alt}}" />
    <div>
      <div id="temp">{{temp}}</div>
      <div id="weather">{{weather}}</div>
      <div id="wind">{{wind}}</div>
      <div>Umidade: <span id="humidity">{{humidity}}</span></div>
      <div>Sensação: <span id="feels">{{feels}}</span></div>
    </div>
  </section>

  <section id="cards">{{cards:children}}</section>

  <p id="updated" class="status">{{updated}}</p>

  <script>
    const themeBtn = document.getElementById('theme-toggle');
    themeBtn?.addEventListener('click', (event) => {
      event.preventDefault();
      fetch('/api/theme/toggle', { method: 'POST' })
        .then((res) => res.json())
        .then((body) => document.body.classList.toggle('light', body.theme === 'light'))
        .catch((err) => console.error(err));
    });

    const refresh = () => {
      fetch('/api/weather')
        .then((res) => res.json())
        .then((doc) => {
          const els = doc.elements;
          ['temp', 'weather', 'wind', 'humidity', 'feels', 'updated'].forEach((id) => {
            document.getElementById(id).textContent = els[id].text;
          });
          const icon = document.getElementById('icon');
          icon.src = els.icon.attrs.src || '';
          icon.alt = els.icon.attrs.alt || '';
          document.getElementById('cards').innerHTML = els.cards.children.join('');
        })
        .catch((err) => console.error(err));
    };

    setInterval(refresh, 30000);
  </script>
</body>
</html>
"#;
