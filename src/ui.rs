pub struct DayTile {
    pub total: u64,
    pub done: u64,
    pub percent: u8,
}

pub fn render_index(date: &str, users: &[String; 2], tiles: &[DayTile; 2]) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{USER_A}}", &escape_html(&users[0]))
        .replace("{{USER_B}}", &escape_html(&users[1]))
        .replace("{{A_TOTAL}}", &tiles[0].total.to_string())
        .replace("{{A_DONE}}", &tiles[0].done.to_string())
        .replace("{{A_PERCENT}}", &tiles[0].percent.to_string())
        .replace("{{B_TOTAL}}", &tiles[1].total.to_string())
        .replace("{{B_DONE}}", &tiles[1].done.to_string())
        .replace("{{B_PERCENT}}", &tiles[1].percent.to_string())
}

// User names come from the environment; everything else substituted into the
// template is numeric or a date key.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Our Todo List</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #fdf4f0;
      --bg-2: #fad4cf;
      --ink: #2b2a28;
      --accent: #e0506a;
      --accent-2: #2f4858;
      --done: #2d7a4b;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe4e0 60%, #f9f0ec 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
      display: grid;
      justify-items: center;
      gap: 24px;
    }

    header.page {
      text-align: center;
      display: grid;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .date-row {
      display: flex;
      align-items: center;
      gap: 14px;
      background: var(--card);
      border-radius: 999px;
      padding: 10px 22px;
      box-shadow: var(--shadow);
    }

    .date-row input {
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 10px;
      padding: 8px 12px;
      font: inherit;
      color: var(--ink);
      background: white;
    }

    .date-note {
      font-size: 0.9rem;
      color: #a4542f;
      min-width: 14ch;
    }

    .board {
      width: min(1060px, 100%);
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(340px, 1fr));
      gap: 24px;
    }

    .panel-card {
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 28px;
      display: grid;
      gap: 18px;
      align-content: start;
      animation: rise 600ms ease;
    }

    .panel-card h2 {
      margin: 0;
      font-family: "Fraunces", "Georgia", serif;
      font-size: 1.5rem;
      text-align: center;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
      justify-self: center;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 16px;
      font: inherit;
      font-size: 0.9rem;
      font-weight: 600;
      color: #6b645d;
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .add-row {
      display: flex;
      gap: 10px;
    }

    .add-row input {
      flex: 1;
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 12px;
      padding: 10px 14px;
      font: inherit;
    }

    .add-row button {
      appearance: none;
      border: none;
      border-radius: 12px;
      padding: 10px 18px;
      font: inherit;
      font-weight: 600;
      color: white;
      background: var(--accent);
      cursor: pointer;
      box-shadow: 0 10px 24px rgba(224, 80, 106, 0.3);
    }

    .add-row button:disabled,
    .add-row input:disabled,
    .todo-list button:disabled {
      opacity: 0.45;
      cursor: not-allowed;
      box-shadow: none;
    }

    .todo-list {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 8px;
      min-height: 60px;
    }

    .todo-list li {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 10px;
      background: white;
      border: 1px solid rgba(47, 72, 88, 0.08);
      border-radius: 14px;
      padding: 10px 14px;
    }

    .todo-list li.done .task-text {
      text-decoration: line-through;
      color: #8b857d;
    }

    .todo-list .task-text {
      flex: 1;
      word-break: break-word;
    }

    .todo-list button {
      appearance: none;
      border: 1px solid rgba(47, 72, 88, 0.2);
      background: white;
      border-radius: 999px;
      width: 32px;
      height: 32px;
      font-size: 0.9rem;
      cursor: pointer;
    }

    .todo-list button.toggle.done {
      background: var(--done);
      border-color: var(--done);
      color: white;
    }

    .todo-list button.remove:hover {
      border-color: #c63b2b;
      color: #c63b2b;
    }

    .empty {
      color: #8b857d;
      font-size: 0.95rem;
      text-align: center;
      padding: 12px 0;
    }

    .metrics {
      display: grid;
      grid-template-columns: repeat(3, 1fr);
      gap: 12px;
    }

    .stat {
      background: white;
      border-radius: 16px;
      padding: 14px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 6px;
      text-align: center;
    }

    .stat .label {
      font-size: 0.78rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 14px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .chart {
      width: 100%;
      height: 240px;
      display: block;
    }

    .chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-label {
      fill: #7a746d;
      font-size: 11px;
    }

    .status {
      font-size: 0.92rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
      text-align: center;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .panel-card {
        padding: 22px 18px;
      }
    }
  </style>
</head>
<body>
  <header class="page">
    <h1>Our Todo List</h1>
    <p class="subtitle">A shared plan for two, one day at a time.</p>
  </header>

  <div class="date-row">
    <label for="date">Day</label>
    <input type="date" id="date" value="{{DATE}}" />
    <span class="date-note" id="date-note"></span>
  </div>

  <main class="board">
    <section class="panel-card" data-user="{{USER_A}}">
      <h2>{{USER_A}}</h2>
      <div class="tabs" role="tablist">
        <button class="tab active" type="button" data-view="todos" role="tab" aria-selected="true">Todos</button>
        <button class="tab" type="button" data-view="performance" role="tab" aria-selected="false">Performance</button>
      </div>
      <div data-pane="todos">
        <form class="add-row">
          <input type="text" placeholder="Add a task..." maxlength="200" />
          <button type="submit">Add</button>
        </form>
        <ul class="todo-list"></ul>
      </div>
      <div data-pane="performance" hidden>
        <div class="chart-card">
          <svg class="chart" viewBox="0 0 520 240" role="img" aria-label="Completion chart"></svg>
        </div>
        <div class="metrics">
          <div class="stat">
            <span class="label">Total</span>
            <span class="value" data-metric="total">{{A_TOTAL}}</span>
          </div>
          <div class="stat">
            <span class="label">Done</span>
            <span class="value" data-metric="done">{{A_DONE}}</span>
          </div>
          <div class="stat">
            <span class="label">Completed</span>
            <span class="value" data-metric="percent">{{A_PERCENT}}%</span>
          </div>
        </div>
      </div>
      <div class="status"></div>
    </section>

    <section class="panel-card" data-user="{{USER_B}}">
      <h2>{{USER_B}}</h2>
      <div class="tabs" role="tablist">
        <button class="tab active" type="button" data-view="todos" role="tab" aria-selected="true">Todos</button>
        <button class="tab" type="button" data-view="performance" role="tab" aria-selected="false">Performance</button>
      </div>
      <div data-pane="todos">
        <form class="add-row">
          <input type="text" placeholder="Add a task..." maxlength="200" />
          <button type="submit">Add</button>
        </form>
        <ul class="todo-list"></ul>
      </div>
      <div data-pane="performance" hidden>
        <div class="chart-card">
          <svg class="chart" viewBox="0 0 520 240" role="img" aria-label="Completion chart"></svg>
        </div>
        <div class="metrics">
          <div class="stat">
            <span class="label">Total</span>
            <span class="value" data-metric="total">{{B_TOTAL}}</span>
          </div>
          <div class="stat">
            <span class="label">Done</span>
            <span class="value" data-metric="done">{{B_DONE}}</span>
          </div>
          <div class="stat">
            <span class="label">Completed</span>
            <span class="value" data-metric="percent">{{B_PERCENT}}%</span>
          </div>
        </div>
      </div>
      <div class="status"></div>
    </section>
  </main>

  <p class="hint">Past days are read-only. Bars turn green above 70% completion, amber above 30%.</p>

  <script>
    const dateInput = document.getElementById('date');
    const dateNote = document.getElementById('date-note');
    const serverToday = dateInput.value;

    const percentOf = (stats) =>
      stats.total > 0 ? Math.round((stats.done / stats.total) * 100) : 0;

    const barColor = (percent) =>
      percent > 70 ? '#2d7a4b' : percent > 30 ? '#d99a06' : '#c63b2b';

    const isPast = () => dateInput.value < serverToday;

    const panels = Array.from(document.querySelectorAll('.panel-card')).map((root) => ({
      root,
      user: root.dataset.user,
      tabs: Array.from(root.querySelectorAll('.tab')),
      panes: {
        todos: root.querySelector('[data-pane="todos"]'),
        performance: root.querySelector('[data-pane="performance"]')
      },
      form: root.querySelector('.add-row'),
      input: root.querySelector('.add-row input'),
      addButton: root.querySelector('.add-row button'),
      list: root.querySelector('.todo-list'),
      chart: root.querySelector('.chart'),
      metrics: {
        total: root.querySelector('[data-metric="total"]'),
        done: root.querySelector('[data-metric="done"]'),
        percent: root.querySelector('[data-metric="percent"]')
      },
      status: root.querySelector('.status'),
      todos: [],
      performance: {}
    }));

    const setStatus = (panel, message, type) => {
      panel.status.textContent = message;
      panel.status.dataset.type = type || '';
    };

    const request = async (url, options) => {
      const res = await fetch(url, options);
      if (!res.ok) {
        let message = 'Request failed';
        try {
          const body = await res.json();
          if (body && body.error) {
            message = body.error;
          }
        } catch (_) {
          /* non-JSON error body */
        }
        throw new Error(message);
      }
      return res;
    };

    const loadPanel = async (panel) => {
      const date = dateInput.value;
      const [todosRes, perfRes] = await Promise.all([
        request(`/api/todo/${encodeURIComponent(panel.user)}/${date}`),
        request(`/api/performance/${encodeURIComponent(panel.user)}`)
      ]);
      panel.todos = await todosRes.json();
      panel.performance = await perfRes.json();
      renderTodos(panel);
      renderPerformance(panel);
    };

    const renderTodos = (panel) => {
      const past = isPast();
      panel.list.innerHTML = '';

      if (!panel.todos.length) {
        const empty = document.createElement('li');
        empty.className = 'empty';
        empty.textContent = past ? 'Nothing was planned this day.' : 'Nothing planned yet.';
        panel.list.appendChild(empty);
        return;
      }

      panel.todos.forEach((todo) => {
        const item = document.createElement('li');
        if (todo.status === 'done') {
          item.classList.add('done');
        }

        const text = document.createElement('span');
        text.className = 'task-text';
        text.textContent = todo.task;

        const toggle = document.createElement('button');
        toggle.type = 'button';
        toggle.className = todo.status === 'done' ? 'toggle done' : 'toggle';
        toggle.textContent = todo.status === 'done' ? '✓' : '○';
        toggle.disabled = past;
        toggle.addEventListener('click', () => {
          request(`/api/todo/${todo.id}`, { method: 'PUT' })
            .then(() => loadPanel(panel))
            .then(() => setStatus(panel, '', ''))
            .catch((err) => setStatus(panel, err.message, 'error'));
        });

        const remove = document.createElement('button');
        remove.type = 'button';
        remove.className = 'remove';
        remove.textContent = '×';
        remove.disabled = past;
        remove.addEventListener('click', () => {
          request(`/api/todo/${todo.id}`, { method: 'DELETE' })
            .then(() => loadPanel(panel))
            .then(() => setStatus(panel, '', ''))
            .catch((err) => setStatus(panel, err.message, 'error'));
        });

        item.appendChild(toggle);
        item.appendChild(text);
        item.appendChild(remove);
        panel.list.appendChild(item);
      });
    };

    const renderPerformance = (panel) => {
      const entries = Object.entries(panel.performance);
      const selected = panel.performance[dateInput.value] || { total: 0, done: 0 };
      panel.metrics.total.textContent = selected.total;
      panel.metrics.done.textContent = selected.done;
      panel.metrics.percent.textContent = `${percentOf(selected)}%`;

      if (!entries.length) {
        panel.chart.innerHTML =
          '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }

      const width = 520;
      const height = 240;
      const paddingX = 40;
      const paddingY = 30;
      const top = 16;
      const plotWidth = width - paddingX * 2;
      const plotHeight = height - top - paddingY;

      // show the most recent days when history grows long
      const points = entries.slice(-14).map(([date, stats]) => ({
        label: date.slice(5),
        percent: percentOf(stats)
      }));

      const slot = plotWidth / points.length;
      const barWidth = Math.min(34, slot * 0.7);
      const y = (percent) => top + plotHeight - (percent / 100) * plotHeight;

      let grid = '';
      for (const tick of [0, 25, 50, 75, 100]) {
        const yPos = y(tick);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 8}" y="${yPos + 4}" text-anchor="end">${tick}</text>`;
      }

      const labelEvery = points.length > 8 ? 2 : 1;
      let bars = '';
      let labels = '';
      points.forEach((point, index) => {
        const center = paddingX + slot * index + slot / 2;
        const barHeight = Math.max(top + plotHeight - y(point.percent), 1);
        bars += `<rect x="${(center - barWidth / 2).toFixed(1)}" y="${y(point.percent).toFixed(1)}" width="${barWidth.toFixed(1)}" height="${barHeight.toFixed(1)}" rx="4" fill="${barColor(point.percent)}" />`;
        if (index % labelEvery === 0) {
          labels += `<text class="chart-label" x="${center}" y="${height - paddingY + 18}" text-anchor="middle">${point.label}</text>`;
        }
      });

      panel.chart.innerHTML = `${grid}${bars}${labels}`;
    };

    const setView = (panel, view) => {
      panel.tabs.forEach((tab) => {
        const active = tab.dataset.view === view;
        tab.classList.toggle('active', active);
        tab.setAttribute('aria-selected', String(active));
      });
      panel.panes.todos.hidden = view !== 'todos';
      panel.panes.performance.hidden = view !== 'performance';
    };

    const applyDateState = () => {
      const past = isPast();
      dateNote.textContent = past ? 'read-only (past day)' : '';
      panels.forEach((panel) => {
        panel.input.disabled = past;
        panel.addButton.disabled = past;
      });
    };

    panels.forEach((panel) => {
      panel.tabs.forEach((tab) => {
        tab.addEventListener('click', () => setView(panel, tab.dataset.view));
      });

      panel.form.addEventListener('submit', (event) => {
        event.preventDefault();
        const task = panel.input.value.trim();
        if (!task) {
          return;
        }
        request('/api/todo', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ user: panel.user, task, date: dateInput.value })
        })
          .then(() => {
            panel.input.value = '';
            setStatus(panel, 'Saved', 'ok');
            setTimeout(() => setStatus(panel, '', ''), 1200);
            return loadPanel(panel);
          })
          .catch((err) => setStatus(panel, err.message, 'error'));
      });
    });

    const refresh = () => {
      applyDateState();
      panels.forEach((panel) => {
        loadPanel(panel).catch((err) => setStatus(panel, err.message, 'error'));
      });
    };

    dateInput.addEventListener('change', refresh);
    refresh();
  </script>
</body>
</html>
"#;
