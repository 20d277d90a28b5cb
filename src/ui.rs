use crate::models::{Aggregates, TicketType};

pub fn render_index(aggregates: &Aggregates) -> String {
    INDEX_HTML
        .replace("{{TOTAL}}", &aggregates.total_entries.to_string())
        .replace("{{REVENUE}}", &aggregates.total_revenue.to_string())
        .replace(
            "{{CHILD}}",
            &aggregates.ticket_count(TicketType::Child).to_string(),
        )
        .replace(
            "{{STUDENT}}",
            &aggregates.ticket_count(TicketType::Student).to_string(),
        )
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>HoopEntry</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f7f4ee;
      --bg-2: #ffd9b3;
      --ink: #27221f;
      --orange: #ff6b00;
      --blue: #0077c2;
      --light-blue: #33a1ff;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(0, 62, 102, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffeeda 60%, #f6f1ea 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
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

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(0, 62, 102, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat span {
      display: block;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--blue);
    }

    .stat .value.revenue {
      color: var(--orange);
    }

    .columns {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
      gap: 24px;
      align-items: start;
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(0, 62, 102, 0.08);
      display: grid;
      gap: 16px;
    }

    .card h2 {
      margin: 0;
      font-size: 1.3rem;
    }

    form {
      display: grid;
      gap: 14px;
    }

    label {
      font-size: 0.9rem;
      font-weight: 600;
      color: #524c46;
      display: grid;
      gap: 6px;
    }

    input[type="text"],
    input[type="number"],
    select {
      font: inherit;
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(0, 62, 102, 0.18);
      background: #fdfcfa;
    }

    .choices {
      display: flex;
      flex-wrap: wrap;
      gap: 14px;
      font-weight: 400;
    }

    .choices label {
      display: inline-flex;
      align-items: center;
      gap: 6px;
      font-weight: 400;
    }

    .checkline {
      display: flex;
      align-items: center;
      gap: 8px;
      font-weight: 400;
    }

    .verify-box {
      margin-left: 24px;
      padding: 8px 10px;
      background: rgba(0, 119, 194, 0.08);
      border-radius: 10px;
    }

    .verify-box.hidden {
      display: none;
    }

    .ticket-preview {
      display: flex;
      align-items: center;
      justify-content: space-between;
      padding: 12px 14px;
      border-radius: 12px;
      background: rgba(255, 107, 0, 0.08);
      font-weight: 600;
    }

    .ticket-preview .price {
      color: var(--orange);
      font-size: 1.2rem;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 10px;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-submit {
      background: var(--orange);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 0, 0.3);
    }

    .btn-ghost {
      background: rgba(0, 62, 102, 0.08);
      color: var(--blue);
      box-shadow: none;
      padding: 10px 16px;
      font-size: 0.9rem;
      text-decoration: none;
    }

    .btn-danger {
      background: rgba(198, 59, 43, 0.1);
      color: #c63b2b;
      box-shadow: none;
      padding: 10px 16px;
      font-size: 0.9rem;
    }

    .chart-header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(0, 62, 102, 0.08);
      border-radius: 999px;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #6b645d;
      box-shadow: none;
    }

    .tab.active {
      background: white;
      color: var(--blue);
      box-shadow: 0 8px 16px rgba(0, 62, 102, 0.12);
    }

    #chart {
      width: 100%;
      height: 260px;
      display: block;
    }

    #chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-bar {
      fill: var(--orange);
    }

    .chart-bar.alt {
      fill: var(--blue);
    }

    .chart-grid {
      stroke: rgba(0, 62, 102, 0.12);
    }

    .chart-label {
      fill: #7a746d;
      font-size: 11px;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.9rem;
    }

    th,
    td {
      text-align: left;
      padding: 8px 6px;
      border-bottom: 1px solid rgba(0, 62, 102, 0.08);
    }

    th {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: #8b857d;
    }

    td.price {
      text-align: right;
      font-weight: 600;
      color: var(--orange);
    }

    th.price {
      text-align: right;
    }

    .empty {
      color: #8b857d;
      text-align: center;
      padding: 16px 0;
    }

    .actions-row {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
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
      .app {
        padding: 28px 22px;
      }
      .btn-submit {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>HoopEntry</h1>
      <p class="subtitle">Basketball event check-in. Process entries at the door and watch the numbers move.</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Total entries</span>
        <span id="stat-total" class="value">{{TOTAL}}</span>
      </div>
      <div class="stat">
        <span class="label">Total revenue</span>
        <span id="stat-revenue" class="value revenue">R{{REVENUE}}</span>
      </div>
      <div class="stat">
        <span class="label">Child entries</span>
        <span id="stat-child" class="value">{{CHILD}}</span>
      </div>
      <div class="stat">
        <span class="label">Student entries</span>
        <span id="stat-student" class="value">{{STUDENT}}</span>
      </div>
    </section>

    <section class="columns">
      <div class="card">
        <h2>Process new entry</h2>
        <form id="entry-form">
          <label>
            Name (optional)
            <input type="text" id="name" placeholder="Enter attendee name" />
          </label>
          <label>
            Age
            <input type="number" id="age" min="0" max="120" required placeholder="Enter age" />
          </label>
          <div>
            <label>Gender</label>
            <div class="choices">
              <label><input type="radio" name="gender" value="Male" checked /> Male</label>
              <label><input type="radio" name="gender" value="Female" /> Female</label>
              <label><input type="radio" name="gender" value="Other" /> Other</label>
            </div>
          </div>
          <div>
            <div class="checkline">
              <input type="checkbox" id="is-student" />
              <label for="is-student">Is a student</label>
            </div>
            <div class="checkline verify-box hidden" id="verify-box">
              <input type="checkbox" id="card-verified" />
              <label for="card-verified">Student card verified</label>
            </div>
          </div>
          <label>
            Payment method
            <select id="payment">
              <option value="Cash">Cash</option>
              <option value="Card">Card</option>
              <option value="Voucher">Voucher</option>
              <option value="Free Entry">Free Entry</option>
            </select>
          </label>
          <div class="ticket-preview" id="ticket-preview">
            <span id="preview-type">Enter an age to see the ticket</span>
            <span class="price" id="preview-price"></span>
          </div>
          <button class="btn-submit" type="submit">Process entry</button>
        </form>
      </div>

      <div class="card">
        <div class="chart-header">
          <h2 id="chart-title">Ticket types</h2>
          <div class="tabs" role="tablist">
            <button class="tab active" type="button" data-tab="tickets" role="tab" aria-selected="true">Tickets</button>
            <button class="tab" type="button" data-tab="genders" role="tab" aria-selected="false">Genders</button>
            <button class="tab" type="button" data-tab="hours" role="tab" aria-selected="false">By hour</button>
          </div>
        </div>
        <svg id="chart" viewBox="0 0 600 260" aria-label="Event chart" role="img"></svg>
      </div>
    </section>

    <section class="card">
      <h2>Recent entries</h2>
      <div id="recent"></div>
      <div class="actions-row">
        <a class="btn-ghost" href="/export/csv" download>Export CSV</a>
        <button class="btn-danger" id="reset-btn" type="button">Reset data</button>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const statTotal = document.getElementById('stat-total');
    const statRevenue = document.getElementById('stat-revenue');
    const statChild = document.getElementById('stat-child');
    const statStudent = document.getElementById('stat-student');
    const statusEl = document.getElementById('status');
    const chartEl = document.getElementById('chart');
    const chartTitleEl = document.getElementById('chart-title');
    const recentEl = document.getElementById('recent');
    const form = document.getElementById('entry-form');
    const nameEl = document.getElementById('name');
    const ageEl = document.getElementById('age');
    const studentEl = document.getElementById('is-student');
    const verifiedEl = document.getElementById('card-verified');
    const verifyBox = document.getElementById('verify-box');
    const paymentEl = document.getElementById('payment');
    const previewType = document.getElementById('preview-type');
    const previewPrice = document.getElementById('preview-price');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    let statsData = null;
    let activeTab = 'tickets';

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    // Mirrors the server-side rule for the live preview; the server decides
    // the real ticket at submission time.
    const ticketFor = (age, isStudent, verified) => {
      if (age < 10) {
        return { type: 'Child', price: 10 };
      }
      if (isStudent && verified) {
        return { type: 'Student', price: 15 };
      }
      return { type: 'Adult', price: 20 };
    };

    const selectedGender = () => {
      const checked = document.querySelector('input[name="gender"]:checked');
      return checked ? checked.value : null;
    };

    const updatePreview = () => {
      const age = parseInt(ageEl.value, 10);
      const showVerify = studentEl.checked && !Number.isNaN(age) && age >= 10;
      verifyBox.classList.toggle('hidden', !showVerify);

      if (Number.isNaN(age)) {
        previewType.textContent = 'Enter an age to see the ticket';
        previewPrice.textContent = '';
        return;
      }
      const ticket = ticketFor(age, studentEl.checked, verifiedEl.checked);
      previewType.textContent = ticket.type + ' ticket';
      previewPrice.textContent = 'R' + ticket.price;
    };

    const updateCards = (stats) => {
      statTotal.textContent = stats.total_entries;
      statRevenue.textContent = 'R' + stats.total_revenue;
      const count = (points, key, value) => {
        const point = points.find((p) => p[key] === value);
        return point ? point.count : 0;
      };
      statChild.textContent = count(stats.ticket_types, 'ticket_type', 'Child');
      statStudent.textContent = count(stats.ticket_types, 'ticket_type', 'Student');
    };

    const renderBarChart = (points) => {
      if (!points.length || points.every((point) => point.value === 0)) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }

      const width = 600;
      const height = 260;
      const paddingX = 44;
      const paddingY = 34;
      const top = 24;

      const max = Math.max(...points.map((point) => point.value), 1);
      const innerWidth = width - paddingX * 2;
      const innerHeight = height - top - paddingY;
      const slot = innerWidth / points.length;
      const barWidth = Math.min(slot * 0.6, 64);

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = (max * i) / ticks;
        const yPos = height - paddingY - (value / max) * innerHeight;
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${Math.round(value)}</text>`;
      }

      const bars = points
        .map((point, index) => {
          const x = paddingX + index * slot + (slot - barWidth) / 2;
          const barHeight = (point.value / max) * innerHeight;
          const y = height - paddingY - barHeight;
          const cls = index % 2 === 0 ? 'chart-bar' : 'chart-bar alt';
          return `<rect class="${cls}" x="${x.toFixed(2)}" y="${y.toFixed(2)}" width="${barWidth.toFixed(2)}" height="${barHeight.toFixed(2)}" rx="6" />`;
        })
        .join('');

      const labels = points
        .map((point, index) => {
          const x = paddingX + index * slot + slot / 2;
          return `<text class="chart-label" x="${x}" y="${height - paddingY + 18}" text-anchor="middle">${point.label}</text>`;
        })
        .join('');

      chartEl.setAttribute('viewBox', `0 0 ${width} ${height}`);
      chartEl.innerHTML = `${grid}${bars}${labels}`;
    };

    const renderActiveTab = () => {
      if (!statsData) {
        return;
      }
      if (activeTab === 'genders') {
        chartTitleEl.textContent = 'Gender distribution';
        renderBarChart(statsData.genders.map((point) => ({
          label: point.gender,
          value: point.count
        })));
      } else if (activeTab === 'hours') {
        chartTitleEl.textContent = 'Entries by hour';
        renderBarChart(statsData.by_hour.map((point) => ({
          label: point.hour,
          value: point.count
        })));
      } else {
        chartTitleEl.textContent = 'Ticket types';
        renderBarChart(statsData.ticket_types.map((point) => ({
          label: point.ticket_type,
          value: point.count
        })));
      }
    };

    const setActiveTab = (tab) => {
      activeTab = tab;
      tabs.forEach((button) => {
        const isActive = button.dataset.tab === tab;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      renderActiveTab();
    };

    const renderRecent = (entries) => {
      if (!entries.length) {
        recentEl.innerHTML = '<p class="empty">No entries recorded yet</p>';
        return;
      }
      const rows = entries
        .slice(0, 12)
        .map((entry) => {
          const time = new Date(entry.timestamp).toLocaleTimeString();
          const name = entry.name || '-';
          return `<tr>
            <td>${time}</td>
            <td>${name}</td>
            <td>${entry.age}</td>
            <td>${entry.gender}</td>
            <td>${entry.ticket_type}</td>
            <td>${entry.payment_method}</td>
            <td class="price">R${entry.ticket_price}</td>
          </tr>`;
        })
        .join('');
      recentEl.innerHTML = `<table>
        <thead>
          <tr><th>Time</th><th>Name</th><th>Age</th><th>Gender</th><th>Ticket</th><th>Payment</th><th class="price">Price</th></tr>
        </thead>
        <tbody>${rows}</tbody>
      </table>`;
    };

    const loadStats = async () => {
      const res = await fetch('/api/stats');
      if (!res.ok) {
        throw new Error('Unable to load stats');
      }
      statsData = await res.json();
      updateCards(statsData);
      renderActiveTab();
    };

    const loadEntries = async () => {
      const res = await fetch('/api/entries');
      if (!res.ok) {
        throw new Error('Unable to load entries');
      }
      renderRecent(await res.json());
    };

    const refresh = async () => {
      await Promise.all([loadStats(), loadEntries()]);
    };

    form.addEventListener('submit', (event) => {
      event.preventDefault();
      const age = parseInt(ageEl.value, 10);
      if (Number.isNaN(age)) {
        setStatus('Please enter a valid age', 'error');
        return;
      }

      const payload = {
        name: nameEl.value || null,
        age,
        gender: selectedGender(),
        is_student: studentEl.checked,
        student_card_verified: studentEl.checked && verifiedEl.checked,
        payment_method: paymentEl.value
      };

      setStatus('Saving...', 'info');
      fetch('/api/entries', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(payload)
      })
        .then(async (res) => {
          if (!res.ok) {
            throw new Error(await res.text() || 'Request failed');
          }
          return res.json();
        })
        .then((record) => {
          setStatus(`${record.ticket_type} ticket processed successfully`, 'ok');
          form.reset();
          updatePreview();
          return refresh();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    studentEl.addEventListener('change', () => {
      if (!studentEl.checked) {
        verifiedEl.checked = false;
      }
      updatePreview();
    });
    verifiedEl.addEventListener('change', updatePreview);
    ageEl.addEventListener('input', updatePreview);

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveTab(button.dataset.tab));
    });

    document.getElementById('reset-btn').addEventListener('click', () => {
      if (!confirm('Are you sure you want to reset all entries? This cannot be undone.')) {
        return;
      }
      fetch('/api/reset', { method: 'POST' })
        .then((res) => {
          if (!res.ok) {
            throw new Error('Reset failed');
          }
          setStatus('All entries have been reset', 'ok');
          return refresh();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    updatePreview();
    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
