pub fn render_index() -> &'static str {
    INDEX_HTML
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Sales Dashboard</title>
  <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&display=swap');

    :root {
      --bg-1: #f4f6f8;
      --bg-2: #dbe7f0;
      --ink: #22303a;
      --accent: #2e7d5b;
      --accent-2: #2f4858;
      --card: #ffffff;
      --shadow: 0 18px 44px rgba(47, 72, 88, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 55%),
        linear-gradient(150deg, var(--bg-1), #eef3f7 70%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(980px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: baseline;
      justify-content: space-between;
      gap: 10px;
    }

    h1 {
      margin: 0;
      font-weight: 600;
      font-size: clamp(1.6rem, 3.5vw, 2.2rem);
    }

    .badges {
      display: flex;
      gap: 10px;
      flex-wrap: wrap;
    }

    .badge {
      border-radius: 999px;
      padding: 6px 14px;
      font-size: 0.85rem;
      font-weight: 600;
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
    }

    .badge[data-level="ok"] { background: #e0f2e9; color: #1f6b45; }
    .badge[data-level="warn"] { background: #fdf0d5; color: #9a6b00; }
    .badge[data-level="error"] { background: #fbe2dc; color: #b23b27; }
    .badge.syncing { background: #dde9f7; color: #2457a0; }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(170px, 1fr));
      gap: 14px;
    }

    .stat {
      background: #fbfcfd;
      border-radius: 16px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 6px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #8b918f;
    }

    .stat .value {
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.profit { color: var(--accent); }

    .stat .value.ratio[data-band="RED"] { color: #b23b27; }
    .stat .value.ratio[data-band="YELLOW"] { color: #9a6b00; }
    .stat .value.ratio[data-band="GREEN"] { color: #1f6b45; }

    .controls {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 16px;
    }

    .controls label {
      font-size: 0.9rem;
      color: #5f6a70;
    }

    input[type="number"] {
      width: 140px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 10px;
      padding: 10px 12px;
      font-size: 1rem;
      font-family: inherit;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 22px;
      font-size: 0.95rem;
      font-weight: 600;
      font-family: inherit;
      cursor: pointer;
      background: var(--accent-2);
      color: white;
      box-shadow: 0 8px 20px rgba(47, 72, 88, 0.25);
    }

    button:disabled {
      cursor: not-allowed;
      opacity: 0.55;
      box-shadow: none;
    }

    .status {
      font-size: 0.9rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] { color: #b23b27; }

    .charts {
      display: grid;
      gap: 18px;
    }

    .chart-card {
      background: #fbfcfd;
      border-radius: 16px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .chart-card h2 {
      margin: 0 0 10px;
      font-size: 1.05rem;
      color: #4a555c;
    }

    @media (max-width: 640px) {
      .app { padding: 20px; }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Daily Sales</h1>
      <div class="badges">
        <span class="badge" id="freshness">Loading…</span>
        <span class="badge" id="sync">Sync: …</span>
      </div>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Revenue</span>
        <span class="value" id="revenue">–</span>
      </div>
      <div class="stat">
        <span class="label">Refunds</span>
        <span class="value" id="refunds">–</span>
      </div>
      <div class="stat">
        <span class="label">Net profit</span>
        <span class="value profit" id="net-profit">–</span>
      </div>
      <div class="stat">
        <span class="label">Ad efficiency</span>
        <span class="value ratio" id="efficiency">N/A</span>
      </div>
    </section>

    <section class="controls">
      <label for="ad-spend">Ad spend</label>
      <input type="number" id="ad-spend" min="0" step="any" placeholder="0" />
      <button id="refresh">Refresh data</button>
      <span class="status" id="refresh-status"></span>
    </section>

    <section class="charts">
      <div class="chart-card">
        <h2>Revenue &amp; net revenue</h2>
        <canvas id="revenue-chart" height="110"></canvas>
      </div>
      <div class="chart-card">
        <h2>Orders</h2>
        <canvas id="orders-chart" height="110"></canvas>
      </div>
    </section>
  </main>

  <script>
    const revenueEl = document.getElementById('revenue');
    const refundsEl = document.getElementById('refunds');
    const netProfitEl = document.getElementById('net-profit');
    const efficiencyEl = document.getElementById('efficiency');
    const freshnessEl = document.getElementById('freshness');
    const syncEl = document.getElementById('sync');
    const adSpendEl = document.getElementById('ad-spend');
    const refreshBtn = document.getElementById('refresh');
    const refreshStatusEl = document.getElementById('refresh-status');

    const POLL_MS = 5000;

    const money = (value) =>
      typeof value === 'number' && Number.isFinite(value) ? value.toFixed(2) : '–';

    const updateMetrics = async () => {
      const params = new URLSearchParams({ ad_spend: adSpendEl.value });
      const res = await fetch(`/api/metrics?${params}`);
      const data = await res.json();
      netProfitEl.textContent = money(data.net_profit);
      if (data.efficiency === null || data.efficiency === undefined) {
        efficiencyEl.textContent = 'N/A';
      } else {
        efficiencyEl.textContent = data.efficiency.toFixed(2);
      }
      efficiencyEl.dataset.band = data.status;
    };

    const load = async () => {
      const res = await fetch('/api/summary');
      const data = await res.json();

      revenueEl.textContent = money(data.total_revenue);
      refundsEl.textContent = money(data.total_refunds);
      freshnessEl.textContent = data.freshness.label;
      freshnessEl.dataset.level = data.freshness.level;

      const labels = data.records.map((record) => record.date);
      // Charts are built once per page load; reload the page for new data.
      new Chart(document.getElementById('revenue-chart'), {
        type: 'line',
        data: {
          labels,
          datasets: [
            {
              label: 'Revenue',
              data: data.records.map((record) => record.revenue),
              borderColor: '#2f4858',
              tension: 0.25,
            },
            {
              label: 'Net revenue',
              data: data.records.map((record) => record.net),
              borderColor: '#2e7d5b',
              tension: 0.25,
            },
          ],
        },
      });

      new Chart(document.getElementById('orders-chart'), {
        type: 'bar',
        data: {
          labels,
          datasets: [
            {
              label: 'Orders',
              data: data.records.map((record) => record.orders),
              backgroundColor: '#7fa8c9',
            },
          ],
        },
      });

      await updateMetrics();
    };

    const pollSync = async () => {
      try {
        const res = await fetch('/api/sync-status');
        const data = await res.json();
        if (data.status === 'syncing') {
          syncEl.textContent = 'Syncing…';
          syncEl.classList.add('syncing');
        } else {
          syncEl.textContent = `Last updated: ${data.last_updated || '–'}`;
          syncEl.classList.remove('syncing');
        }
      } catch (err) {
        // Swallowed; the next poll tries again.
      }
    };

    let countdownTimer = null;

    const endCooldown = () => {
      if (countdownTimer !== null) {
        clearInterval(countdownTimer);
        countdownTimer = null;
      }
      refreshBtn.disabled = false;
      refreshBtn.textContent = 'Refresh data';
    };

    refreshBtn.addEventListener('click', async () => {
      if (refreshBtn.disabled) {
        return;
      }
      refreshBtn.disabled = true;
      refreshStatusEl.textContent = '';
      refreshStatusEl.dataset.type = '';
      syncEl.textContent = 'Syncing…';
      syncEl.classList.add('syncing');

      try {
        const res = await fetch('/api/refresh', { method: 'POST' });
        if (!res.ok) {
          throw new Error(await res.text());
        }
        const data = await res.json();
        // Heuristic cooldown only; it does not confirm job completion.
        let remaining = data.cooldown_secs;
        refreshBtn.textContent = `Refreshing (${remaining}s)`;
        countdownTimer = setInterval(() => {
          remaining -= 1;
          if (remaining <= 0) {
            endCooldown();
          } else {
            refreshBtn.textContent = `Refreshing (${remaining}s)`;
          }
        }, 1000);
      } catch (err) {
        endCooldown();
        refreshStatusEl.textContent = 'Refresh failed, try again.';
        refreshStatusEl.dataset.type = 'error';
      }
    });

    adSpendEl.addEventListener('input', () => {
      updateMetrics().catch(() => {});
    });

    load().catch(() => {});
    pollSync();
    setInterval(pollSync, POLL_MS);
  </script>
</body>
</html>
"#;
