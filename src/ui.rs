use crate::models::LogResponse;

pub fn render_index(date: &str, snapshot: &LogResponse) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{TOTAL}}", &snapshot.today_total.to_string())
        .replace("{{GOAL}}", &snapshot.goal.to_string())
        .replace("{{PCT}}", &snapshot.pct.to_string())
        .replace("{{STREAK}}", &snapshot.streak.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Hydration Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&display=swap');

    :root {
      --bg-1: #e8f4fb;
      --bg-2: #bfe3f5;
      --ink: #163b4d;
      --water: #2e9bd6;
      --water-deep: #1b6f9e;
      --streak: #ff9b42;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(27, 111, 158, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(160deg, var(--bg-1), #f2fbff 70%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(820px, 100%);
      background: var(--card);
      border-radius: 26px;
      box-shadow: var(--shadow);
      padding: 34px;
      display: grid;
      gap: 26px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    .subtitle {
      margin: 0;
      color: #49768c;
      font-size: 0.95rem;
    }

    .layout {
      display: grid;
      grid-template-columns: 120px 1fr;
      gap: 26px;
      align-items: center;
    }

    .bottle {
      position: relative;
      height: 240px;
      border: 3px solid var(--water-deep);
      border-radius: 18px 18px 26px 26px;
      overflow: hidden;
      background: white;
    }

    .bottle-fill {
      position: absolute;
      bottom: 0;
      left: 0;
      right: 0;
      background: linear-gradient(180deg, var(--water), var(--water-deep));
      transition: height 400ms ease;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
      gap: 14px;
    }

    .stat {
      background: white;
      border-radius: 16px;
      padding: 14px 16px;
      border: 1px solid rgba(27, 111, 158, 0.12);
      display: grid;
      gap: 6px;
    }

    .stat .label {
      font-size: 0.78rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #6f94a6;
    }

    .stat .value {
      font-size: 1.55rem;
      font-weight: 600;
      color: var(--water-deep);
    }

    .stat .value.streak {
      color: var(--streak);
    }

    .bar {
      height: 14px;
      border-radius: 999px;
      background: rgba(27, 111, 158, 0.12);
      overflow: hidden;
    }

    .bar-fill {
      height: 100%;
      background: linear-gradient(90deg, var(--water), var(--water-deep));
      transition: width 400ms ease;
    }

    .actions {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 13px 22px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 120ms ease;
    }

    button:active {
      transform: scale(0.97);
    }

    .log-btn {
      background: var(--water);
      color: white;
      box-shadow: 0 10px 22px rgba(46, 155, 214, 0.35);
    }

    .ghost {
      background: rgba(27, 111, 158, 0.1);
      color: var(--water-deep);
    }

    .goal-form {
      display: flex;
      gap: 10px;
      align-items: center;
      flex-wrap: wrap;
    }

    .goal-form input {
      width: 110px;
      padding: 10px 12px;
      border-radius: 10px;
      border: 1px solid rgba(27, 111, 158, 0.3);
      font: inherit;
    }

    #chart {
      width: 100%;
      height: 220px;
      display: block;
      background: white;
      border-radius: 18px;
      border: 1px solid rgba(27, 111, 158, 0.12);
    }

    .chart-bar {
      fill: var(--water);
    }

    .chart-bar.met {
      fill: var(--water-deep);
    }

    .chart-goal {
      stroke: var(--streak);
      stroke-width: 2;
      stroke-dasharray: 5 5;
    }

    .chart-label {
      fill: #6f94a6;
      font-size: 10px;
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    @media (max-width: 560px) {
      .layout {
        grid-template-columns: 1fr;
      }
      .bottle {
        height: 140px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Hydration Tracker</h1>
      <p class="subtitle">{{DATE}} &middot; log every glass, keep the streak alive.</p>
    </header>

    <div class="layout">
      <div class="bottle" aria-hidden="true">
        <div id="bottle-fill" class="bottle-fill" style="height: {{PCT}}%"></div>
      </div>

      <div>
        <section class="panel">
          <div class="stat">
            <span class="label">Today (ml)</span>
            <span id="today-total" class="value">{{TOTAL}}</span>
          </div>
          <div class="stat">
            <span class="label">Goal (ml)</span>
            <span id="goal" class="value">{{GOAL}}</span>
          </div>
          <div class="stat">
            <span class="label">Progress</span>
            <span class="value"><span id="progress-pct">{{PCT}}</span>%</span>
          </div>
          <div class="stat">
            <span class="label">Streak (days)</span>
            <span id="streak" class="value streak">{{STREAK}}</span>
          </div>
        </section>
        <p class="subtitle" style="margin-top: 14px">Daily progress</p>
        <div class="bar">
          <div id="progress-bar" class="bar-fill" style="width: {{PCT}}%"></div>
        </div>
      </div>
    </div>

    <section class="actions">
      <button class="log-btn" type="button" data-ml="150">+150 ml</button>
      <button class="log-btn" type="button" data-ml="250">+250 ml</button>
      <button class="log-btn" type="button" data-ml="330">+330 ml</button>
      <button class="log-btn" type="button" data-ml="500">+500 ml</button>
      <button id="notify-toggle" class="ghost" type="button">Reminders</button>
      <button id="reset-btn" class="ghost" type="button">Reset today</button>
    </section>

    <form class="goal-form" method="post" action="/set-goal">
      <label for="goal-input" class="subtitle">Daily goal (ml)</label>
      <input id="goal-input" name="daily_goal_ml" type="number" min="250" max="10000" step="50" value="{{GOAL}}" />
      <button class="ghost" type="submit">Update goal</button>
    </form>

    <section>
      <p class="subtitle">Last 14 days</p>
      <svg id="chart" viewBox="0 0 600 220" role="img" aria-label="Intake history"></svg>
    </section>
  </main>

  <script>
    const todayEl = document.getElementById('today-total');
    const goalEl = document.getElementById('goal');
    const pctEl = document.getElementById('progress-pct');
    const streakEl = document.getElementById('streak');
    const chartEl = document.getElementById('chart');

    let notifyTimer = null;

    const requestNotificationPermission = () => {
      if (!('Notification' in window)) return;
      if (Notification.permission === 'default') {
        Notification.requestPermission();
      }
    };

    const startReminders = (intervalMinutes) => {
      stopReminders();
      const ms = intervalMinutes * 60 * 1000;
      notifyTimer = setInterval(() => {
        if (Notification.permission === 'granted') {
          new Notification('Time to drink water \u{1F4A7}', { body: 'Tap to log your intake!' });
        }
      }, ms);
      localStorage.setItem('hydration_reminder_minutes', String(intervalMinutes));
    };

    const stopReminders = () => {
      if (notifyTimer) {
        clearInterval(notifyTimer);
        notifyTimer = null;
      }
      localStorage.removeItem('hydration_reminder_minutes');
    };

    const initReminders = () => {
      requestNotificationPermission();
      const saved = parseInt(localStorage.getItem('hydration_reminder_minutes') || '0', 10);
      if (saved > 0) startReminders(saved);
    };

    const applyUpdate = (data) => {
      todayEl.textContent = data.today_total;
      goalEl.textContent = data.goal;
      pctEl.textContent = data.pct;
      streakEl.textContent = data.streak;
      const bottle = document.getElementById('bottle-fill');
      const bar = document.getElementById('progress-bar');
      if (bottle) bottle.style.height = data.pct + '%';
      if (bar) bar.style.width = data.pct + '%';
    };

    const logWater = async (ml) => {
      try {
        const res = await fetch('/api/log', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ amount_ml: ml })
        });
        const data = await res.json();
        if (data.ok) {
          applyUpdate(data);
          loadChart().catch((err) => console.error(err));
        }
      } catch (err) {
        console.error(err);
      }
    };

    const resetToday = async () => {
      try {
        const res = await fetch('/api/reset', { method: 'POST' });
        const data = await res.json();
        if (data.ok) {
          applyUpdate(data);
          loadChart().catch((err) => console.error(err));
        }
      } catch (err) {
        console.error(err);
      }
    };

    const loadChart = async () => {
      const res = await fetch('/api/stats?days=14');
      if (!res.ok) {
        throw new Error('Unable to load stats');
      }
      renderChart(await res.json());
    };

    const renderChart = (days) => {
      const width = 600;
      const height = 220;
      const paddingX = 16;
      const paddingY = 28;

      const goal = days.length ? days[0].goal : 0;
      const max = Math.max(goal, ...days.map((d) => d.total), 1);
      const slot = (width - paddingX * 2) / days.length;
      const barWidth = Math.max(slot - 8, 4);
      const scale = (height - paddingY * 2) / max;
      const baseline = height - paddingY;

      const bars = days
        .map((day, index) => {
          const barHeight = day.total * scale;
          const x = paddingX + index * slot + (slot - barWidth) / 2;
          const met = goal > 0 && day.total >= goal ? ' met' : '';
          return `<rect class="chart-bar${met}" x="${x.toFixed(1)}" y="${(baseline - barHeight).toFixed(1)}" width="${barWidth.toFixed(1)}" height="${barHeight.toFixed(1)}" rx="3" />`;
        })
        .join('');

      const labels = days
        .map((day, index) => {
          if (index % 2 !== days.length % 2) return '';
          const x = paddingX + index * slot + slot / 2;
          return `<text class="chart-label" x="${x.toFixed(1)}" y="${height - 10}" text-anchor="middle">${day.date.slice(5)}</text>`;
        })
        .join('');

      const goalY = baseline - goal * scale;
      const goalLine = goal > 0
        ? `<line class="chart-goal" x1="${paddingX}" y1="${goalY.toFixed(1)}" x2="${width - paddingX}" y2="${goalY.toFixed(1)}" />`
        : '';

      chartEl.innerHTML = `${bars}${goalLine}${labels}`;
    };

    document.addEventListener('DOMContentLoaded', () => {
      initReminders();

      document.querySelectorAll('.log-btn').forEach((btn) => {
        btn.addEventListener('click', () => {
          const ml = parseInt(btn.dataset.ml, 10);
          logWater(ml);
        });
      });

      const resetBtn = document.getElementById('reset-btn');
      if (resetBtn) {
        resetBtn.addEventListener('click', () => resetToday());
      }

      const notifyToggle = document.getElementById('notify-toggle');
      if (notifyToggle) {
        notifyToggle.addEventListener('click', async () => {
          if (!('Notification' in window)) return alert('Notifications not supported in this browser.');
          if (Notification.permission !== 'granted') {
            await Notification.requestPermission();
          }
          if (notifyTimer) {
            stopReminders();
            alert('Reminders disabled.');
          } else {
            const minutes = parseInt(prompt('Remind me every how many minutes? (e.g., 120)', '120') || '0', 10);
            if (minutes > 0) {
              startReminders(minutes);
              alert('Reminders enabled.');
            }
          }
        });
      }

      loadChart().catch((err) => console.error(err));
    });
  </script>
</body>
</html>
"#;
