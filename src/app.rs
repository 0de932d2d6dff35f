use leptos::html::{Div as DivElement, Header as HeaderElement};
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, OnceLock};

use gloo::timers::callback::Interval;
use strum::IntoEnumIterator;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::{
    application::{AnalyzeTradeSignalUseCase, RefreshMarketDataUseCase},
    domain::{
        errors::SignalError,
        logging::{LogBuffer, LogComponent, get_logger},
        market_data::{
            AdrInfo, CurrencyPair, CurrencyStrength, DxyReading, Impact, LiquidityZone, MarketAnalysisService,
            MarketState, NewsEvent, Trend, ZoneBias, all_pairs, major_pairs,
        },
        session::{
            MarketInstant, current_local_time, default_selected_session, default_sessions, format_clock,
            is_overlap_active, session_statuses,
            timeline::{TimelineZone, day_progress_pct, offset_hours, session_segments, zone_clock},
        },
        signal::{
            GAUGE_LABEL, RiskReward, SignalQuality, TradeSignal, VerdictTone, advice, confidence_color,
            gauge_angle, gauge_arc_path,
        },
    },
    infrastructure::{config::AdviserConfig, http::GeminiSignalClient, mock_market_data::MockMarketDataSource},
    log_warn,
    time_utils::{format_hour_label, format_marker, format_offset},
    view_state::{DashboardSection, MenuState, SectionVisibility, VerdictView},
};

const DEBUG_LOG_CAPACITY: usize = 100;

static DEBUG_LOG: OnceLock<Arc<LogBuffer>> = OnceLock::new();

/// Shared buffer behind the in-page debug console
pub fn debug_log() -> Arc<LogBuffer> {
    DEBUG_LOG.get_or_init(|| Arc::new(LogBuffer::new(DEBUG_LOG_CAPACITY))).clone()
}

/// 💹 Root dashboard component
#[component]
pub fn App() -> impl IntoView {
    let config = AdviserConfig::from_build_env();
    if config.api_key.is_none() {
        log_warn!(LogComponent::Presentation("App"), "⚠️ API_KEY not set, analysis is disabled");
    }

    let now = create_rw_signal(current_local_time());
    let market_state = create_rw_signal(None::<MarketState>);
    let selected_pair = create_rw_signal(major_pairs().remove(0));
    let selected_session =
        create_rw_signal(default_selected_session(&session_statuses(&now.get_untracked(), default_sessions())));
    let trade_signal = create_rw_signal(None::<TradeSignal>);
    let signal_error = create_rw_signal(None::<SignalError>);
    let analyzing = create_rw_signal(false);
    let refreshing = create_rw_signal(false);
    let visibility = create_rw_signal(SectionVisibility::default());
    let menu = create_rw_signal(MenuState::default());
    let header_ref = create_node_ref::<HeaderElement>();

    let live_price = create_memo(move |_| {
        let pair = selected_pair.get();
        market_state.with(|state| {
            state.as_ref().map(|state| MarketAnalysisService::new().reference_price(&pair, &state.dxy))
        })
    });

    let refresh_use_case = Rc::new(RefCell::new(RefreshMarketDataUseCase::new(MockMarketDataSource::from_clock())));
    let analyze_use_case = AnalyzeTradeSignalUseCase::new(GeminiSignalClient::new(config.clone()));

    let refresh = move || {
        let state = refresh_use_case.borrow_mut().execute(&current_local_time());
        market_state.set(Some(state));
    };
    refresh();

    let clock = Interval::new(config.clock_tick_ms, move || now.set(current_local_time()));
    let refresh_timer = {
        let refresh = refresh.clone();
        Interval::new(config.refresh_interval_ms, refresh)
    };

    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        if let Some(header) = header_ref.get_untracked() {
            let bottom = header.get_bounding_client_rect().bottom();
            menu.update(|m| m.on_scroll(bottom));
        }
    });

    on_cleanup(move || {
        drop(clock);
        drop(refresh_timer);
        scroll_listener.remove();
    });

    let run_analysis = move || {
        let Some(state) = market_state.get_untracked() else {
            return;
        };
        let pair = selected_pair.get_untracked();
        let use_case = analyze_use_case.clone();
        analyzing.set(true);
        signal_error.set(None);
        spawn_local(async move {
            match use_case.execute(pair, &state, &current_local_time()).await {
                Ok(signal) => {
                    signal_error.set(None);
                    trade_signal.set(Some(signal));
                }
                Err(err) => {
                    trade_signal.set(None);
                    signal_error.set(Some(err));
                }
            }
            analyzing.set(false);
        });
    };

    {
        let run_analysis = run_analysis.clone();
        create_effect(move |_| {
            selected_pair.with(|_| ());
            market_state.with(|_| ());
            run_analysis();
        });
    }

    let on_refresh = Callback::new(move |_: ()| {
        refreshing.set(true);
        refresh();
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(1_200).await;
            refreshing.set(false);
        });
    });
    let on_analyze = Callback::new(move |_: ()| run_analysis());

    view! {
        <style>{DASHBOARD_CSS}</style>
        <Show when=move || market_state.with(Option::is_some) fallback=|| view! { <LoadingScreen /> }>
        <div class="fx-app">
            <FloatingMenu now=now menu=menu selected_session=selected_session />
            <header class="header" node_ref=header_ref>
                <div class="brand">
                    <button
                        class="refresh-btn"
                        class:spinning={move || refreshing.get()}
                        title="Refresh Market Data"
                        on:click=move |_| on_refresh.call(())
                    >
                        "⟳"
                    </button>
                    <div>
                        <h1><span class="badge">"CORE"</span>" FXCURRENCY ADVISER"</h1>
                        <p class="subtitle">"Institutional Advisory Engine"</p>
                    </div>
                </div>
                <SessionClock now=now selected_session=selected_session />
            </header>
            {move || market_state.get().map(|state| {
                let MarketState { currencies, news, dxy, liquidity_zones, adr, .. } = state;
                view! {
                <div class="grid">
                    <aside class="column">
                        <Panel title="Currency Power" section=DashboardSection::Strength visibility=visibility>
                            <StrengthMeter currencies=currencies.clone() />
                        </Panel>
                        <Panel title="Range Exhaustion" section=DashboardSection::Adr visibility=visibility>
                            <AdrMeter adr=adr />
                        </Panel>
                        <Panel title="Target Selection" section=DashboardSection::Target visibility=visibility>
                            <TargetSelection selected_pair=selected_pair />
                        </Panel>
                    </aside>
                    <main class="column wide">
                        <Panel title="Market Timeline" section=DashboardSection::Timeline visibility=visibility>
                            <MarketTimeline now=now />
                        </Panel>
                        <Panel title="Institutional Liquidity Nodes" section=DashboardSection::Liquidity visibility=visibility>
                            <LiquidityNodes zones=liquidity_zones.clone() />
                        </Panel>
                    </main>
                    <aside class="column">
                        <Panel title="Dollar Index (DXY)" section=DashboardSection::Dollar visibility=visibility>
                            <DollarIndex dxy=dxy />
                        </Panel>
                        <Panel title="Economic Pulse" section=DashboardSection::News visibility=visibility>
                            <EconomicPulse news=news.clone() />
                        </Panel>
                    </aside>
                </div>
                }
            })}
            <Panel title="Predictive Verdict" section=DashboardSection::Analysis visibility=visibility>
                <Verdict
                    selected_pair=selected_pair
                    trade_signal=trade_signal
                    signal_error=signal_error
                    analyzing=analyzing
                    live_price=live_price
                    on_analyze=on_analyze
                />
            </Panel>
            <DebugConsole now=now />
        </div>
        </Show>
    }
}

/// Shown until the first market snapshot lands
#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-ring"></div>
            <h2>"FX Adviser Core"</h2>
            <p>"Synthesizing Alpha..."</p>
        </div>
    }
}

/// Collapsible card; children are rebuilt when the section is shown again
#[component]
fn Panel(
    title: &'static str,
    section: DashboardSection,
    visibility: RwSignal<SectionVisibility>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <section class="panel">
            <div class="panel-header">
                <h3>{title}</h3>
                <button class="eye-btn" on:click=move |_| visibility.update(|v| v.toggle(section))>
                    {move || if visibility.get().is_visible(section) { "👁" } else { "🚫" }}
                </button>
            </div>
            {move || visibility.get().is_visible(section).then(|| view! { <div class="panel-body">{children()}</div> })}
        </section>
    }
}

#[component]
fn FloatingMenu(
    now: RwSignal<MarketInstant>,
    menu: RwSignal<MenuState>,
    selected_session: RwSignal<String>,
) -> impl IntoView {
    let scroll_to_verdict = move |_| {
        if let Some(el) = document().get_element_by_id("final-action") {
            el.scroll_into_view();
        }
        menu.update(|m| m.close());
    };
    let reload = move |_| {
        if let Err(err) = window().location().reload() {
            log_warn!(LogComponent::Presentation("FloatingMenu"), "⚠️ Reload failed: {:?}", err);
        }
    };

    let menu_ref = create_node_ref::<DivElement>();
    let outside_listener = window_event_listener(ev::mousedown, move |ev| {
        if !menu.get_untracked().open {
            return;
        }
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let inside = menu_ref.get_untracked().is_some_and(|root| root.contains(target.as_ref()));
        menu.update(|m| m.on_pointer_down(inside));
    });
    on_cleanup(move || outside_listener.remove());

    view! {
        <div class="floating-menu" class:visible={move || menu.get().sticky} node_ref=menu_ref>
            <button class="menu-btn" on:click=move |_| menu.update(|m| m.toggle())>
                {move || if menu.get().open { "✕ MENU" } else { "☰ MENU" }}
            </button>
            <div class="menu-body" class:open={move || menu.get().open}>
                <div class="menu-clock">
                    <span>{move || format_clock(&now.get())}</span>
                    <button title="Emergency Reset" on:click=reload>"⏻"</button>
                </div>
                <div class="menu-sessions">
                    {default_sessions()
                        .iter()
                        .map(|s| {
                            let name = s.name().to_string();
                            let label = name.clone();
                            let is_selected = {
                                let name = name.clone();
                                move || selected_session.get() == name
                            };
                            view! {
                                <button
                                    class:selected=is_selected
                                    on:click=move |_| {
                                        selected_session.set(name.clone());
                                        menu.update(|m| m.close());
                                    }
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <button class="verdict-btn" on:click=scroll_to_verdict>"⚡ FINAL VERDICT"</button>
            </div>
        </div>
    }
}

/// Lagos clock with open/closed chips per session and the overlap chip
#[component]
fn SessionClock(now: RwSignal<MarketInstant>, selected_session: RwSignal<String>) -> impl IntoView {
    let statuses = move || session_statuses(&now.get(), default_sessions());
    let overlap_active = move || is_overlap_active(&now.get());

    view! {
        <div class="session-clock">
            <div class="clock">
                <span class="clock-label">"Institutional Time (Lagos)"</span>
                <span class="clock-value">{move || format_clock(&now.get())}</span>
            </div>
            <div class="chips">
                {move || statuses()
                    .into_iter()
                    .map(|s| {
                        let name = s.name.clone();
                        let selected = {
                            let name = name.clone();
                            move || selected_session.get() == name
                        };
                        view! {
                            <button
                                class="chip"
                                class:open=s.is_open
                                class:selected=selected
                                on:click=move |_| selected_session.set(name.clone())
                            >
                                <span class="dot"></span>
                                {s.name.to_uppercase()}
                            </button>
                        }
                    })
                    .collect_view()}
                <button
                    class="chip overlap"
                    class:open=overlap_active
                    class:selected={move || selected_session.get() == "Overlap"}
                    on:click=move |_| selected_session.set("Overlap".to_string())
                >
                    "⚡ VOLATILITY OVERLAP"
                </button>
            </div>
        </div>
    }
}

#[component]
fn StrengthMeter(currencies: Vec<CurrencyStrength>) -> impl IntoView {
    let service = MarketAnalysisService::new();
    let ranked = service.rank_by_strength(&currencies);
    let spread = service
        .strongest_and_weakest(&currencies)
        .map(|(strong, weak)| format!("{} vs {}", strong.symbol, weak.symbol));
    view! {
        <div class="strength-meter">
            {spread.map(|s| view! { <span class="caption">"Widest spread: "{s}</span> })}
            {ranked
                .into_iter()
                .map(|c| {
                    let width = c.strength.abs().min(100.0);
                    let class = if c.strength >= 0.0 { "bar positive" } else { "bar negative" };
                    view! {
                        <div class="strength-row">
                            <span class="symbol">{c.symbol.clone()}</span>
                            <div class="track">
                                <div class=class style=format!("width: {:.0}%", width)></div>
                            </div>
                            <span class="value">{format!("{:+.0}", c.strength)}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn AdrMeter(adr: AdrInfo) -> impl IntoView {
    let exhausted = adr.is_exhausted();
    view! {
        <div class="adr-meter" class:exhausted=exhausted>
            <div class="adr-head">
                <span>"Market Energy Used"</span>
                <span class="adr-pct">{format!("{}%", adr.percentage_used)}</span>
            </div>
            <div class="track">
                <div class="fill" style=format!("width: {}%", adr.fill_pct())></div>
            </div>
            <div class="adr-foot">
                <span>{format!("MOVED: {} Pips", adr.current_pips)}</span>
                <span>{format!("DAILY LIMIT: {} Pips", adr.average_pips)}</span>
            </div>
        </div>
    }
}

#[component]
fn TargetSelection(selected_pair: RwSignal<CurrencyPair>) -> impl IntoView {
    view! {
        <div class="target-selection">
            <span class="caption">"Quick Access Majors"</span>
            <div class="pair-grid">
                {major_pairs()
                    .into_iter()
                    .map(|pair| {
                        let label = pair.to_string();
                        let current = pair.clone();
                        view! {
                            <button
                                class:selected={move || selected_pair.get() == current}
                                on:click=move |_| selected_pair.set(pair.clone())
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <span class="caption">"Expanded Asset List"</span>
            <select
                on:change=move |ev| {
                    if let Ok(pair) = CurrencyPair::try_from(event_target_value(&ev).as_str()) {
                        selected_pair.set(pair);
                    }
                }
                prop:value={move || selected_pair.get().to_string()}
            >
                {all_pairs()
                    .into_iter()
                    .map(|pair| view! { <option value=pair.to_string()>{pair.to_string()}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

/// 24h bar chart of the session table in a chosen display zone
#[component]
fn MarketTimeline(now: RwSignal<MarketInstant>) -> impl IntoView {
    let zone = create_rw_signal(TimelineZone::default());
    let offset = move || offset_hours(zone.get(), &now.get().to_utc());
    let marker = move || zone_clock(zone.get(), &now.get().to_utc());

    view! {
        <div class="timeline">
            <div class="timeline-controls">
                <select on:change=move |ev| {
                    if let Some(z) = TimelineZone::from_iana(&event_target_value(&ev)) {
                        zone.set(z);
                    }
                }>
                    {TimelineZone::iter()
                        .map(|z| view! {
                            <option value=z.iana() selected={move || zone.get() == z}>{z.to_string()}</option>
                        })
                        .collect_view()}
                </select>
                <span class="offset">{move || format!("OFFSET: {}", format_offset(offset()))}</span>
                <div class="legend">
                    {default_sessions()
                        .iter()
                        .map(|s| view! {
                            <span class="legend-item">
                                <span class="swatch" style=format!("background-color: {}", s.display_color())></span>
                                {s.name().to_string()}
                            </span>
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="timeline-body">
                <div class="hour-grid">
                    {(0..24u32).map(|h| view! { <span class="hour">{format_hour_label(h)}</span> }).collect_view()}
                </div>
                {move || {
                    let offset = offset();
                    default_sessions()
                        .iter()
                        .map(|s| {
                            let color = s.display_color().to_string();
                            view! {
                                <div class="track-row" title=format!("{} Market", s.name())>
                                    {session_segments(s, offset)
                                        .into_iter()
                                        .map(|seg| view! {
                                            <div
                                                class="segment"
                                                style=format!(
                                                    "left: {:.3}%; width: {:.3}%; background-color: {}",
                                                    seg.left_pct, seg.width_pct, color
                                                )
                                            ></div>
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()
                }}
                <div
                    class="now-marker"
                    style=move || {
                        let (h, m) = marker();
                        format!("left: {:.3}%", day_progress_pct(h, m))
                    }
                >
                    <span>{move || { let (h, m) = marker(); format_marker(h, m) }}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn LiquidityNodes(zones: Vec<LiquidityZone>) -> impl IntoView {
    view! {
        <div class="liquidity">
            {zones
                .into_iter()
                .map(|zone| {
                    let selling = zone.bias == ZoneBias::Selling;
                    view! {
                        <div class="zone" class:selling=selling>
                            <div>
                                <span class="zone-kind">{zone.kind.clone()}</span>
                                <span class="zone-price">{format!("{:.5}", zone.price)}</span>
                                <span class="zone-bias">{zone.bias.to_string()}</span>
                            </div>
                            <div class="pips">
                                {(0..zone.strength).map(|_| view! { <span class="pip"></span> }).collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn DollarIndex(dxy: DxyReading) -> impl IntoView {
    view! {
        <div class="dxy">
            <span class="dxy-price">{format!("{:.2}", dxy.price)}</span>
            <span class="trend" class:bullish={dxy.trend == Trend::Bullish}>
                {dxy.trend.to_string().to_uppercase()}
            </span>
        </div>
    }
}

#[component]
fn EconomicPulse(news: Vec<NewsEvent>) -> impl IntoView {
    view! {
        <div class="news">
            {news
                .into_iter()
                .map(|n| view! {
                    <div class="news-item">
                        <div class="news-head">
                            <span class="news-time">{n.time.clone()}</span>
                            <span class="news-ccy">{n.currency.clone()}</span>
                        </div>
                        <p>{n.event.clone()}</p>
                        <span class="impact" class:high={n.impact == Impact::High}>
                            {format!("{} IMPACT", n.impact.as_ref().to_uppercase())}
                        </span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Verdict(
    selected_pair: RwSignal<CurrencyPair>,
    trade_signal: RwSignal<Option<TradeSignal>>,
    signal_error: RwSignal<Option<SignalError>>,
    analyzing: RwSignal<bool>,
    live_price: Memo<Option<f64>>,
    on_analyze: Callback<()>,
) -> impl IntoView {
    let verdict = move || VerdictView::resolve(signal_error.get(), trade_signal.get());

    view! {
        <div id="final-action" class="verdict">
            <div class="verdict-head">
                <h2>"PREDICTIVE VERDICT: "<span class="pair">{move || selected_pair.get().to_string()}</span></h2>
                <button disabled={move || analyzing.get()} on:click=move |_| on_analyze.call(())>
                    {move || if analyzing.get() { "⏳ ANALYZING" } else { "🧠 RE-SYNC ANALYSIS" }}
                </button>
            </div>
            {move || match verdict() {
                VerdictView::Error(err) => view! {
                    <div class="error">
                        <span class="category">{format!("[{}]", err.category())}</span>
                        <p>{err.to_string()}</p>
                        <button class="retry-btn" on:click=move |_| on_analyze.call(())>"RE-INITIATE CORE"</button>
                    </div>
                }
                .into_view(),
                VerdictView::Signal(signal) => view! {
                    <SignalCard signal=signal current_price={live_price.get()} />
                }
                .into_view(),
                VerdictView::Standby => view! {
                    <div class="signal-card">
                        <ConfidenceGauge score=0.0 />
                        <ActionBox label={"STANDBY".to_string()} tone=VerdictTone::Neutral />
                    </div>
                }
                .into_view(),
            }}
        </div>
    }
}

/// Half-ring confidence dial
#[component]
fn ConfidenceGauge(score: f64) -> impl IntoView {
    const CX: f64 = 120.0;
    const CY: f64 = 120.0;
    let track = gauge_arc_path(CX, CY, 110.0, 85.0, gauge_angle(100.0));
    let fill = gauge_arc_path(CX, CY, 110.0, 85.0, gauge_angle(score));

    view! {
        <div class="gauge">
            <svg viewBox="0 0 240 130">
                <path d=track fill="#27272a"></path>
                <path d=fill fill={confidence_color(score)}></path>
            </svg>
            <span class="gauge-value">{format!("{}%", score.round().clamp(0.0, 100.0) as u8)}</span>
            <span class="gauge-label">{GAUGE_LABEL}</span>
        </div>
    }
}

#[component]
fn ActionBox(label: String, tone: VerdictTone) -> impl IntoView {
    view! {
        <div class={format!("action-box {}", tone.as_ref())}>
            <span class="caption">"RECOMMENDED ACTION"</span>
            <span class="action-label">{label}</span>
        </div>
    }
}

#[component]
fn SignalCard(signal: TradeSignal, current_price: Option<f64>) -> impl IntoView {
    let targets = current_price.and_then(|price| RiskReward::for_targets(signal.tp, signal.sl, price));
    let directive = advice(&signal, &signal.pair);
    let action_class = match signal.action {
        a if a.is_long() => "action long",
        a if a.is_short() => "action short",
        _ => "action wait",
    };

    view! {
        <div class="signal-card">
            <ConfidenceGauge score=signal.score />
            <ActionBox label={signal.action.to_string()} tone={VerdictTone::of(signal.score)} />
            <div class="signal-top">
                <span class=action_class>{signal.action.to_string()}</span>
                <span class="quality" class:risky={signal.quality == SignalQuality::Unsafe}>
                    {signal.quality.to_string()}
                </span>
            </div>
            <p class="directive">{directive}</p>
            {match targets {
                Some(rr) => view! {
                    <div class="levels">
                        <span>{format!("Profit Target {:.5}", signal.tp)}</span>
                        <span>{format!("Safety Exit {:.5}", signal.sl)}</span>
                        <span>{format!("Expected Reward +{} Pips", rr.gain_pips)}</span>
                        <span>{format!("Limited Risk -{} Pips", rr.risk_pips)}</span>
                        {rr.ratio().map(|r| view! { <span>{format!("R:R {:.2}", r)}</span> })}
                    </div>
                    <div class="mini-chart">
                        <div class="marker" style=format!("bottom: {:.1}%", rr.marker_pct)></div>
                    </div>
                }
                .into_view(),
                None => view! { <div class="mini-chart placeholder">"Mapping Price Targets..."</div> }.into_view(),
            }}
            <div class="flags">
                {signal.smt_divergence.then(|| view! { <span class="flag">"SMT DIVERGENCE"</span> })}
                {signal.adr_exhausted.then(|| view! { <span class="flag">"ADR EXHAUSTED"</span> })}
            </div>
            <ol class="reasoning">
                {signal.reasoning.into_iter().map(|r| view! { <li>{r}</li> }).collect_view()}
            </ol>
        </div>
    }
}

/// 🐛 In-page view of the domain logger
#[component]
fn DebugConsole(now: RwSignal<MarketInstant>) -> impl IntoView {
    let buffer = debug_log();
    let paused = create_rw_signal(false);
    let frozen = create_rw_signal(Vec::<String>::new());

    let lines = {
        let buffer = buffer.clone();
        move || {
            now.with(|_| ());
            if paused.get() { frozen.get() } else { buffer.lines() }
        }
    };

    let toggle_pause = {
        let buffer = buffer.clone();
        move |_| {
            if !paused.get_untracked() {
                frozen.set(buffer.lines());
            }
            paused.update(|p| *p = !*p);
        }
    };

    let clear = move |_| {
        buffer.clear();
        frozen.set(Vec::new());
        get_logger().info(LogComponent::Presentation("DebugConsole"), "🗑️ Log history cleared");
    };

    view! {
        <div class="debug-console">
            <div class="debug-header">
                <span>"🐛 Domain Logger Console"</span>
                <button class="debug-btn" on:click=toggle_pause>
                    {move || if paused.get() { "▶️ Resume" } else { "⏸️ Pause" }}
                </button>
                <button class="debug-btn" on:click=clear>"🗑️ Clear"</button>
            </div>
            <div class="debug-log">
                {move || lines().into_iter().map(|line| view! { <div class="log-line">{line}</div> }).collect_view()}
            </div>
        </div>
    }
}

const DASHBOARD_CSS: &str = r#"
.fx-app { font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif; background: #09090b; color: #e4e4e7; min-height: 100vh; padding: 24px; }
.header { display: flex; flex-wrap: wrap; justify-content: space-between; gap: 24px; border-bottom: 1px solid #27272a; padding-bottom: 24px; }
.brand { display: flex; gap: 16px; align-items: flex-start; }
.badge { background: #2563eb; padding: 2px 10px; border-radius: 12px; font-size: 12px; }
.subtitle { color: #71717a; font-size: 11px; letter-spacing: 0.3em; text-transform: uppercase; }
.refresh-btn.spinning { animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
.session-clock { display: flex; gap: 24px; align-items: center; background: #18181b; padding: 16px; border-radius: 16px; }
.clock-value { font-family: monospace; font-size: 32px; font-weight: 900; }
.chip { background: #18181b; border: 1px solid #27272a; color: #52525b; border-radius: 10px; padding: 8px 12px; font-size: 10px; font-weight: 900; }
.chip.open { color: #34d399; border-color: rgba(16,185,129,0.3); }
.chip.overlap.open { color: #fb923c; border-color: rgba(249,115,22,0.4); }
.chip.selected { outline: 2px solid #3b82f6; }
.grid { display: grid; grid-template-columns: 1fr 2fr 1fr; gap: 24px; margin-top: 24px; }
.panel { background: #111113; border: 1px solid #27272a; border-radius: 16px; margin-bottom: 24px; overflow: hidden; }
.panel-header { display: flex; justify-content: space-between; padding: 12px 16px; background: rgba(24,24,27,0.4); }
.panel-body { padding: 16px; }
.track { height: 8px; background: #18181b; border-radius: 999px; overflow: hidden; position: relative; }
.bar.positive, .fill { background: #3b82f6; height: 100%; }
.bar.negative { background: #f43f5e; height: 100%; }
.adr-meter.exhausted .fill { background: #ef4444; }
.timeline-body { position: relative; height: 220px; }
.hour-grid { display: flex; justify-content: space-between; font-size: 8px; color: #52525b; }
.track-row { position: relative; height: 20px; margin-top: 18px; }
.segment { position: absolute; height: 20px; opacity: 0.7; border-radius: 2px; }
.now-marker { position: absolute; top: 0; bottom: 0; width: 2px; background: #f43f5e; }
.zone { display: flex; justify-content: space-between; padding: 16px; border-radius: 16px; border: 2px solid rgba(16,185,129,0.2); }
.zone.selling { border-color: rgba(244,63,94,0.2); }
.pip { display: inline-block; width: 6px; height: 24px; margin-left: 4px; border-radius: 999px; background: #10b981; }
.zone.selling .pip { background: #f43f5e; }
.trend { color: #fb7185; } .trend.bullish { color: #34d399; }
.impact { color: #fbbf24; } .impact.high { color: #fb7185; }
.verdict .error { color: #fda4af; background: rgba(244,63,94,0.1); padding: 12px; border-radius: 12px; }
.quality.risky { color: #fb7185; }
.action.long { color: #34d399; } .action.short { color: #fb7185; } .action.wait { color: #fbbf24; }
.mini-chart { position: relative; height: 120px; border-left: 2px solid #27272a; }
.mini-chart.placeholder { display: flex; align-items: center; justify-content: center; color: #52525b; font-size: 11px; letter-spacing: 0.2em; }
.gauge { position: relative; display: flex; flex-direction: column; align-items: center; }
.gauge svg { width: 240px; height: 130px; }
.gauge-value { position: absolute; top: 80px; font-size: 32px; font-weight: 900; }
.gauge-label { font-size: 10px; letter-spacing: 0.3em; color: #71717a; }
.action-box { padding: 16px; border-radius: 16px; border: 1px solid #3f3f46; text-align: center; margin: 12px 0; }
.action-box .action-label { display: block; font-size: 28px; font-weight: 900; }
.action-box.positive { border-color: #10b981; color: #34d399; }
.action-box.negative { border-color: #f43f5e; color: #fb7185; }
.action-box.neutral { color: #e4e4e7; }
.directive { font-size: 13px; line-height: 1.6; color: #d4d4d8; }
.retry-btn { margin-top: 8px; padding: 6px 14px; border-radius: 8px; background: #f43f5e; color: #fff; font-weight: 800; }
.loading-screen { min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 8px; }
.loading-ring { width: 64px; height: 64px; border: 4px solid #27272a; border-top-color: #10b981; border-radius: 50%; animation: spin 1s linear infinite; }
.marker { position: absolute; left: 0; right: 0; height: 2px; background: #3b82f6; }
.floating-menu { position: fixed; top: 24px; right: 24px; z-index: 110; display: none; }
.floating-menu.visible { display: block; }
.menu-body { display: none; } .menu-body.open { display: block; background: #0c0c0e; padding: 24px; border-radius: 24px; }
.debug-console { margin-top: 24px; background: #000; border-radius: 10px; font-family: monospace; font-size: 11px; }
.debug-header { display: flex; gap: 8px; padding: 8px; background: #18181b; }
.debug-log { max-height: 220px; overflow-y: auto; padding: 8px; }
.log-line:hover { background: #18181b; }
"#;
